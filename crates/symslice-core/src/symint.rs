//! Extended integers: concrete platform-width values or symbolic placeholders
//!
//! The symbolic side is an opaque capability. Any runtime's symbolic integer
//! plugs in by implementing [`SymbolicInt`]; [`SymVar`] is the implementation
//! shipped with this crate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Capability required from a host runtime's symbolic integer type
pub trait SymbolicInt: Clone + fmt::Debug + fmt::Display {
    /// Whether the value is still unresolved.
    fn is_symbolic(&self) -> bool;

    /// Convert into an extended integer. A value that is no longer symbolic
    /// must come back as [`ExtInt::Int`].
    fn to_ext_int(&self) -> ExtInt<Self>;
}

/// Extended integer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtInt<S> {
    Int(isize),
    Sym(S),
}

impl<S: SymbolicInt> ExtInt<S> {
    pub fn is_symbolic(&self) -> bool {
        match self {
            ExtInt::Int(_) => false,
            ExtInt::Sym(s) => s.is_symbolic(),
        }
    }

    /// Concrete value, or `None` when symbolic.
    pub fn maybe_as_int(&self) -> Option<isize> {
        match self {
            ExtInt::Int(v) => Some(*v),
            ExtInt::Sym(s) => match s.to_ext_int() {
                ExtInt::Int(v) => Some(v),
                ExtInt::Sym(_) => None,
            },
        }
    }

    /// Concrete value.
    ///
    /// # Errors
    /// Returns `SymbolicValue` if the value is symbolic.
    pub fn expect_int(&self) -> Result<isize> {
        self.maybe_as_int()
            .ok_or_else(|| Error::SymbolicValue(self.to_string()))
    }
}

impl<S> From<isize> for ExtInt<S> {
    fn from(v: isize) -> Self {
        ExtInt::Int(v)
    }
}

impl<S: fmt::Display> fmt::Display for ExtInt<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExtInt::Int(v) => write!(f, "{}", v),
            ExtInt::Sym(s) => write!(f, "{}", s),
        }
    }
}

/// Named symbolic integer, optionally specialized to a known value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymVar {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<isize>,
}

impl SymVar {
    /// Unresolved symbol
    pub fn new(name: impl Into<String>) -> Self {
        SymVar {
            name: name.into(),
            value: None,
        }
    }

    /// Symbol already specialized to `value`
    pub fn specialized(name: impl Into<String>, value: isize) -> Self {
        SymVar {
            name: name.into(),
            value: Some(value),
        }
    }
}

impl fmt::Display for SymVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{}={}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

impl SymbolicInt for SymVar {
    fn is_symbolic(&self) -> bool {
        self.value.is_none()
    }

    fn to_ext_int(&self) -> ExtInt<Self> {
        match self.value {
            Some(v) => ExtInt::Int(v),
            None => ExtInt::Sym(self.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_accessors() {
        let v: ExtInt<SymVar> = ExtInt::Int(-4);
        assert!(!v.is_symbolic());
        assert_eq!(v.maybe_as_int(), Some(-4));
        assert_eq!(v.expect_int(), Ok(-4));
    }

    #[test]
    fn test_symbolic_expect_int_fails() {
        let v = ExtInt::Sym(SymVar::new("s0"));
        assert!(v.is_symbolic());
        assert_eq!(v.maybe_as_int(), None);
        assert_eq!(v.expect_int(), Err(Error::SymbolicValue("s0".into())));
    }

    #[test]
    fn test_specialized_symbol_is_concrete() {
        let s = SymVar::specialized("s1", 7);
        assert!(!s.is_symbolic());
        assert_eq!(s.to_ext_int(), ExtInt::Int(7));

        let wrapped = ExtInt::Sym(s);
        assert!(!wrapped.is_symbolic());
        assert_eq!(wrapped.expect_int(), Ok(7));
    }

    #[test]
    fn test_from_isize_is_concrete() {
        let v: ExtInt<SymVar> = ExtInt::from(isize::MIN);
        assert_eq!(v, ExtInt::Int(isize::MIN));
        assert!(!v.is_symbolic());
    }

    #[test]
    fn test_display() {
        assert_eq!(ExtInt::<SymVar>::Int(3).to_string(), "3");
        assert_eq!(ExtInt::Sym(SymVar::new("n")).to_string(), "n");
        assert_eq!(SymVar::specialized("n", 2).to_string(), "n=2");
    }

    #[test]
    fn test_serialization_shape() {
        let v = ExtInt::Sym(SymVar::new("s0"));
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json, serde_json::json!({"sym": {"name": "s0"}}));
        let back: ExtInt<SymVar> = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }
}
