//! Widget builders and their paint routines.
//!
//! A builder turns into a [`Declaration`](crate::widget::Declaration) when it
//! is handed to `Ui`; painting happens later, during `Ui::commit`.

pub mod button;
pub mod checkbox;
pub mod text;
pub mod textbox;

/// Per-frame animation state a boxed widget is painted with.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Visuals {
    /// Eased hover amount in `[0, 1]`.
    pub hover: f64,
    /// Post-click flash intensity in `[0, 1]`.
    pub flash: f64,
    pub focused: bool,
}
