use crate::types::err::{self};

/// A configurable value, with the bounds of sensible values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Whether `value` lies within the bounds of the option.
    pub fn permits(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }

    /// Sets the value of the option, if within bounds, and returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        match self.permits(&value) {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }
}

impl<T: PartialOrd + std::fmt::Debug> ConfigOption<T> {
    /// Sets the value of the option, or returns the bounds of the option if `value` is outside them.
    pub fn try_set(&mut self, value: T) -> Result<(), err::ConfigError> {
        match self.permits(&value) {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(err::ConfigError::OutOfBounds {
                option: self.name,
                min: format!("{:?}", self.min),
                max: format!("{:?}", self.max),
            }),
        }
    }
}
