//! One tool instance per host session.
//!
//! Invoking the tool a second time shows the instance that already exists
//! instead of building a new one, so unsaved palette edits survive closing
//! and reopening the window.

/// Holds at most one tool instance and whether it is currently shown.
#[derive(Debug)]
pub struct ToolRegistry<T> {
    instance: Option<T>,
    visible: bool,
}

impl<T> Default for ToolRegistry<T> {
    fn default() -> Self {
        Self {
            instance: None,
            visible: false,
        }
    }
}

impl<T> ToolRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the existing instance, or build one with `create` and show it.
    ///
    /// If `create` fails nothing is registered and the error is returned.
    pub fn show_or_create<E>(&mut self, create: impl FnOnce() -> Result<T, E>) -> Result<&mut T, E> {
        let instance = match self.instance.take() {
            Some(existing) => {
                log::debug!("Showing existing tool instance");
                existing
            }
            None => {
                log::info!("Creating tool instance");
                create()?
            }
        };
        self.visible = true;
        Ok(self.instance.insert(instance))
    }

    /// Hide the instance without dropping it.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible && self.instance.is_some()
    }

    pub fn is_created(&self) -> bool {
        self.instance.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.instance.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.instance.as_mut()
    }

    /// The instance, only while it is shown.
    pub fn visible_mut(&mut self) -> Option<&mut T> {
        if self.visible {
            self.instance.as_mut()
        } else {
            None
        }
    }
}
