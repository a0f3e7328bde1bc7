//! Slice normalizer — resolves a slice descriptor into three extended integers
//!
//! Absent endpoints take the standard slice defaults, concrete endpoints are
//! coerced to `isize`, and symbolic endpoints are carried through untouched.
//! No clamping against a container length happens here; see
//! [`crate::adjust`] for that.
//!
//! # Guarantees
//!
//! - **Total**: the result never contains an absent field
//! - **Nonzero step**: the resulting step is always a nonzero concrete value
//! - **Negatable step**: the resulting step is never `isize::MIN`
//! - **Pure**: no state is kept between calls

use serde::{Deserialize, Serialize};

use crate::error::SliceField;
use crate::symint::{ExtInt, SymbolicInt};
use crate::{Error, Result};

/// One endpoint of a slice as supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint<S> {
    /// Not given; the default depends on the sign of the step
    Absent,
    /// Integer-like value, not yet narrowed to the platform width
    Index(i128),
    /// Symbolic integer
    Symbolic(S),
}

/// Start/stop/step triple as supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceDescriptor<S> {
    pub start: Endpoint<S>,
    pub stop: Endpoint<S>,
    pub step: Endpoint<S>,
}

impl<S> SliceDescriptor<S> {
    /// Descriptor with concrete or absent endpoints
    pub fn from_ints(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        let endpoint = |v: Option<isize>| v.map_or(Endpoint::Absent, |v| Endpoint::Index(v as i128));
        SliceDescriptor {
            start: endpoint(start),
            stop: endpoint(stop),
            step: endpoint(step),
        }
    }

    /// The full slice `::`
    pub fn full() -> Self {
        SliceDescriptor {
            start: Endpoint::Absent,
            stop: Endpoint::Absent,
            step: Endpoint::Absent,
        }
    }
}

/// Resolved slice, ready for the indexing engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnpackedSlice<S> {
    pub start: ExtInt<S>,
    pub stop: ExtInt<S>,
    pub step: ExtInt<S>,
}

impl<S: SymbolicInt> UnpackedSlice<S> {
    /// True when none of the three fields is symbolic
    pub fn is_concrete(&self) -> bool {
        !(self.start.is_symbolic() || self.stop.is_symbolic() || self.step.is_symbolic())
    }

    /// `(start, stop, step)` as plain integers.
    ///
    /// # Errors
    /// Returns `SymbolicValue` for the first symbolic field.
    pub fn as_concrete(&self) -> Result<(isize, isize, isize)> {
        Ok((
            self.start.expect_int()?,
            self.stop.expect_int()?,
            self.step.expect_int()?,
        ))
    }
}

/// Unpack a slice descriptor into concrete-or-symbolic start, stop and step
///
/// # Errors
/// - `SymbolicStep` if the step is symbolic
/// - `ZeroStep` if the step is zero
/// - `AmbiguousDefault` if start or stop is absent and the step is symbolic
/// - `Coercion` if a concrete endpoint does not fit in `isize`
pub fn unpack_slice<S: SymbolicInt>(desc: &SliceDescriptor<S>) -> Result<UnpackedSlice<S>> {
    let result = unpack_fields(desc);
    match &result {
        Ok(unpacked) => tracing::trace!(
            start = %unpacked.start,
            stop = %unpacked.stop,
            step = %unpacked.step,
            "slice unpacked"
        ),
        Err(err) => tracing::debug!(?desc, "rejected slice: {}", err),
    }
    result
}

fn unpack_fields<S: SymbolicInt>(desc: &SliceDescriptor<S>) -> Result<UnpackedSlice<S>> {
    let step = unpack_step(&desc.step)?;
    let start = unpack_bound(&desc.start, &step, SliceField::Start)?;
    let stop = unpack_bound(&desc.stop, &step, SliceField::Stop)?;
    Ok(UnpackedSlice { start, stop, step })
}

fn unpack_step<S: SymbolicInt>(step: &Endpoint<S>) -> Result<ExtInt<S>> {
    match step {
        Endpoint::Absent => Ok(ExtInt::Int(1)),
        Endpoint::Symbolic(_) => Err(Error::SymbolicStep),
        Endpoint::Index(raw) => {
            let step = narrow(*raw, SliceField::Step)?;
            if step == 0 {
                return Err(Error::ZeroStep);
            }
            // `-step` must stay representable for slice reversal.
            Ok(ExtInt::from(step.max(-isize::MAX)))
        }
    }
}

fn unpack_bound<S: SymbolicInt>(
    bound: &Endpoint<S>,
    step: &ExtInt<S>,
    field: SliceField,
) -> Result<ExtInt<S>> {
    match bound {
        Endpoint::Symbolic(s) => Ok(s.to_ext_int()),
        Endpoint::Index(raw) => narrow(*raw, field).map(ExtInt::Int),
        Endpoint::Absent => {
            let step = step
                .maybe_as_int()
                .ok_or(Error::AmbiguousDefault { endpoint: field })?;
            let default = match (field, step < 0) {
                (SliceField::Start, false) => 0,
                (SliceField::Start, true) => isize::MAX,
                (_, false) => isize::MAX,
                (_, true) => isize::MIN,
            };
            Ok(ExtInt::from(default))
        }
    }
}

fn narrow(raw: i128, endpoint: SliceField) -> Result<isize> {
    isize::try_from(raw).map_err(|_| Error::Coercion {
        endpoint,
        value: raw,
    })
}
