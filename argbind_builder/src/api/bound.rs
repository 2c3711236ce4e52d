use std::cell::RefCell;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::str::FromStr;

use thiserror::Error;

use crate::prelude::Collectable;

/// The failure to bind a token onto its destination.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// The token could not convert to the destination type.
    #[error("cannot convert '{token}' to {type_name}.")]
    Conversion {
        /// The offending token.
        token: String,
        /// The destination type.
        type_name: &'static str,
    },

    /// The callback destination rejected the converted value.
    #[error("cannot apply '{token}': {message}.")]
    Application {
        /// The offending token.
        token: String,
        /// The callback's reason.
        message: String,
    },
}

/// Behaviour to bind a `&str` token onto a destination whose type has been erased.
///
/// We use this at the seam of the parser object graph: beneath it each destination keeps its type `T`, while above it parsers of every `T` are stored and invoked uniformly.
pub trait BoundRef {
    /// Whether the destination accepts repeated binds.
    fn is_container(&self) -> bool {
        false
    }

    /// Whether the destination is set by the presence of an option, rather than by a value.
    fn is_flag(&self) -> bool {
        false
    }

    /// Convert the token (via [`FromStr`]) and apply it to the destination.
    fn bind(&self, token: &str) -> Result<(), BindError>;

    /// Set a flag destination.
    fn set_flag(&self, flag: bool) -> Result<(), BindError> {
        Err(BindError::Application {
            token: flag.to_string(),
            message: "destination is not a flag".to_string(),
        })
    }
}

/// The outcome of a bound callback.
///
/// Implemented for `()` (the callback cannot fail) and `Result<(), E>` (the callback may reject its value).
pub trait CallbackResult {
    /// Transform into a result, keeping the error's message.
    fn into_result(self) -> Result<(), String>;
}

impl CallbackResult for () {
    fn into_result(self) -> Result<(), String> {
        Ok(())
    }
}

impl<E: std::fmt::Display> CallbackResult for Result<(), E> {
    fn into_result(self) -> Result<(), String> {
        self.map_err(|error| error.to_string())
    }
}

fn convert<T: FromStr>(token: &str) -> Result<T, BindError> {
    T::from_str(token).map_err(|_| BindError::Conversion {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}

/// Binds onto a single value, overwriting it on each bind.
pub struct BoundValue<'a, T> {
    variable: RefCell<&'a mut T>,
}

impl<'a, T> BoundValue<'a, T> {
    /// Create a value binding.
    pub fn new(variable: &'a mut T) -> Self {
        Self {
            variable: RefCell::new(variable),
        }
    }
}

impl<'a, T: FromStr> BoundRef for BoundValue<'a, T> {
    fn bind(&self, token: &str) -> Result<(), BindError> {
        let value = convert::<T>(token)?;
        **self.variable.borrow_mut() = value;
        Ok(())
    }
}

/// Binds onto an [`Option`], replacing it with `Some` on each bind.
pub struct BoundOptional<'a, T> {
    variable: RefCell<&'a mut Option<T>>,
}

impl<'a, T> BoundOptional<'a, T> {
    /// Create an optional binding.
    pub fn new(variable: &'a mut Option<T>) -> Self {
        Self {
            variable: RefCell::new(variable),
        }
    }
}

impl<'a, T: FromStr> BoundRef for BoundOptional<'a, T> {
    fn bind(&self, token: &str) -> Result<(), BindError> {
        let value = convert::<T>(token)?;
        self.variable.borrow_mut().replace(value);
        Ok(())
    }
}

/// Binds onto a [`Collectable`], adding to it on each bind.
pub struct BoundCollection<'a, C, T> {
    variable: RefCell<&'a mut C>,
    _phantom: PhantomData<T>,
}

impl<'a, C: Collectable<T>, T> BoundCollection<'a, C, T> {
    /// Create a collection binding.
    pub fn new(variable: &'a mut C) -> Self {
        Self {
            variable: RefCell::new(variable),
            _phantom: PhantomData,
        }
    }
}

impl<'a, C: Collectable<T>, T: FromStr> BoundRef for BoundCollection<'a, C, T> {
    fn is_container(&self) -> bool {
        true
    }

    fn bind(&self, token: &str) -> Result<(), BindError> {
        let value = convert::<T>(token)?;
        (**self.variable.borrow_mut()).add(value);
        Ok(())
    }
}

/// Binds onto a `bool` flag.
pub struct BoundFlag<'a> {
    variable: RefCell<&'a mut bool>,
}

impl<'a> BoundFlag<'a> {
    /// Create a flag binding.
    pub fn new(variable: &'a mut bool) -> Self {
        Self {
            variable: RefCell::new(variable),
        }
    }
}

impl<'a> BoundRef for BoundFlag<'a> {
    fn is_flag(&self) -> bool {
        true
    }

    fn bind(&self, token: &str) -> Result<(), BindError> {
        let value = convert::<bool>(token)?;
        self.set_flag(value)
    }

    fn set_flag(&self, flag: bool) -> Result<(), BindError> {
        **self.variable.borrow_mut() = flag;
        Ok(())
    }
}

/// Binds by invoking a callback with the converted value.
pub struct BoundLambda<F, T> {
    callback: RefCell<F>,
    _phantom: PhantomData<fn(T)>,
}

impl<F, T, R> BoundLambda<F, T>
where
    F: FnMut(T) -> R,
    R: CallbackResult,
{
    /// Create a callback binding.
    pub fn new(callback: F) -> Self {
        Self {
            callback: RefCell::new(callback),
            _phantom: PhantomData,
        }
    }
}

impl<F, T, R> BoundRef for BoundLambda<F, T>
where
    F: FnMut(T) -> R,
    R: CallbackResult,
    T: FromStr,
{
    fn bind(&self, token: &str) -> Result<(), BindError> {
        let value = convert::<T>(token)?;
        let mut callback = self.callback.borrow_mut();
        (*callback)(value)
            .into_result()
            .map_err(|message| BindError::Application {
                token: token.to_string(),
                message,
            })
    }
}

/// Binds a flag by invoking a callback.
pub struct BoundFlagLambda<F> {
    callback: RefCell<F>,
}

impl<F, R> BoundFlagLambda<F>
where
    F: FnMut(bool) -> R,
    R: CallbackResult,
{
    /// Create a flag callback binding.
    pub fn new(callback: F) -> Self {
        Self {
            callback: RefCell::new(callback),
        }
    }
}

impl<F, R> BoundRef for BoundFlagLambda<F>
where
    F: FnMut(bool) -> R,
    R: CallbackResult,
{
    fn is_flag(&self) -> bool {
        true
    }

    fn bind(&self, token: &str) -> Result<(), BindError> {
        let value = convert::<bool>(token)?;
        self.set_flag(value)
    }

    fn set_flag(&self, flag: bool) -> Result<(), BindError> {
        let mut callback = self.callback.borrow_mut();
        (*callback)(flag)
            .into_result()
            .map_err(|message| BindError::Application {
                token: flag.to_string(),
                message,
            })
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}
