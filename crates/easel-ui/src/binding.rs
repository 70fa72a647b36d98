use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Shared, mutable value a widget reads and writes across frames.
///
/// The application keeps one clone and hands another to the widget each
/// frame; the UI writes through it during `Ui::commit` (a checkbox toggling,
/// a text box being typed into) and the application sees the change on its
/// next read.
pub struct Binding<T>(Rc<RefCell<T>>);

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    /// Mutates the value in place and returns the closure's result.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }
}

impl<T: Clone> Binding<T> {
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&*self.0.borrow()).finish()
    }
}

impl<T> From<T> for Binding<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_value() {
        let a = Binding::new(String::from("x"));
        let b = a.clone();
        b.update(|s| s.push('y'));
        assert_eq!(a.get(), "xy");

        let c = Binding::new(String::from("x"));
        c.set(String::from("z"));
        assert_eq!(c.get(), "z");
        assert_eq!(a.get(), "xy");
    }
}
