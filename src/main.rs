// SPDX-License-Identifier: MPL-2.0
use chat_heads::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            eprintln!("Ignoring --config-dir: {err}");
            None
        });
    let export_diagnostics: Option<PathBuf> = args
        .opt_value_from_str("--export-diagnostics")
        .unwrap_or_else(|err| {
            eprintln!("Ignoring --export-diagnostics: {err}");
            None
        });

    let unused = args.finish();
    if !unused.is_empty() {
        eprintln!("Ignoring unknown arguments: {unused:?}");
    }

    app::run(Flags {
        config_dir,
        export_diagnostics,
    })
}
