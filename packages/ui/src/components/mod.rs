//! Form controls and feedback primitives shared by every view.

mod badge;
pub use badge::{Badge, BadgeVariant};

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Textarea};

mod label;
pub use label::Label;

mod spinner;
pub use spinner::Spinner;

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider};
