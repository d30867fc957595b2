// SPDX-License-Identifier: MPL-2.0
//! Chat head presentation core.
//!
//! Framework-independent logic behind the overlay: the state machine in
//! [`controller`], plus the drag interpreter, dismiss timer, animation driver
//! and banner view it coordinates. The iced widgets in `crate::ui` only feed
//! input into a [`Controller`] and paint what it reports.

pub mod animation;
pub mod banner;
pub mod controller;
pub mod gesture;
pub mod resolver;
pub mod settings;
pub mod timer;

pub use animation::{Animation, AnimationDriver, AnimationId, AnimationKind, BannerFrame, Easing};
pub use banner::{BannerId, BannerMetrics, BannerView};
pub use controller::{Controller, Delegate};
pub use gesture::{DragResolution, GestureEvent, GesturePhase, GestureSample};
pub use resolver::{ContentResolver, Directory, RawNotification};
pub use settings::{Insets, PresentationSettings};
pub use timer::DismissTimer;
