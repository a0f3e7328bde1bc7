//! Python bindings for symslice
//!
//! Thin wrapper around `symslice-core` — ZERO logic here.
//! All behavior comes from the canonical Rust implementation.

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PySlice;
use symslice_core::{Endpoint, Error, ErrorKind, ExtInt, SliceDescriptor, SliceField, SymVar};

/// Symbolic integer placeholder.
///
/// Args:
///     name: symbol name
///     value: known value, if the symbol has been specialized
#[pyclass(name = "SymInt", module = "symslice", frozen)]
#[derive(Clone)]
struct PySymInt {
    inner: SymVar,
}

#[pymethods]
impl PySymInt {
    #[new]
    #[pyo3(signature = (name, value=None))]
    fn new(name: String, value: Option<isize>) -> Self {
        PySymInt {
            inner: SymVar { name, value },
        }
    }

    #[getter]
    fn name(&self) -> &str {
        &self.inner.name
    }

    #[getter]
    fn value(&self) -> Option<isize> {
        self.inner.value
    }

    /// True while the symbol has no known value
    fn is_symbolic(&self) -> bool {
        symslice_core::SymbolicInt::is_symbolic(&self.inner)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        match self.inner.value {
            Some(v) => format!("SymInt({:?}, {})", self.inner.name, v),
            None => format!("SymInt({:?})", self.inner.name),
        }
    }
}

fn to_py_err(err: Error) -> PyErr {
    match err.kind() {
        ErrorKind::Coercion => PyTypeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn endpoint(obj: &Bound<'_, PyAny>, field: SliceField) -> PyResult<Endpoint<SymVar>> {
    if obj.is_none() {
        return Ok(Endpoint::Absent);
    }
    if let Ok(sym) = obj.downcast::<PySymInt>() {
        return Ok(Endpoint::Symbolic(sym.get().inner.clone()));
    }
    // Goes through `__index__`, like the interpreter's own slicing.
    obj.extract::<i128>().map(Endpoint::Index).map_err(|e| {
        PyTypeError::new_err(format!("Failed parsing slicing {} to integer: {}", field, e))
    })
}

fn descriptor(slice: &Bound<'_, PySlice>) -> PyResult<SliceDescriptor<SymVar>> {
    Ok(SliceDescriptor {
        start: endpoint(&slice.getattr("start")?, SliceField::Start)?,
        stop: endpoint(&slice.getattr("stop")?, SliceField::Stop)?,
        step: endpoint(&slice.getattr("step")?, SliceField::Step)?,
    })
}

fn ext_to_py(py: Python<'_>, value: ExtInt<SymVar>) -> PyResult<PyObject> {
    match value {
        ExtInt::Int(v) => Ok(v.into_pyobject(py)?.into_any().unbind()),
        ExtInt::Sym(inner) => Ok(Py::new(py, PySymInt { inner })?.into_any()),
    }
}

/// Unpack a slice into normalized (start, stop, step).
///
/// Absent endpoints are filled with the standard defaults, integer-like
/// endpoints are narrowed to the platform width and SymInt endpoints are
/// passed through.
///
/// Args:
///     slice: a Python slice object; endpoints may be None, ints or SymInt
///
/// Returns:
///     Tuple (start, stop, step); start/stop may be SymInt
///
/// Raises:
///     ValueError: If the step is zero or symbolic
///     TypeError: If an endpoint is not an integer that fits the platform width
#[pyfunction]
fn unpack_slice(py: Python<'_>, slice: &Bound<'_, PySlice>) -> PyResult<(PyObject, PyObject, PyObject)> {
    let unpacked = symslice_core::unpack_slice(&descriptor(slice)?).map_err(to_py_err)?;
    Ok((
        ext_to_py(py, unpacked.start)?,
        ext_to_py(py, unpacked.stop)?,
        ext_to_py(py, unpacked.step)?,
    ))
}

/// Unpack a slice and clamp it against a sequence length.
///
/// Args:
///     slice: a Python slice object
///     length: length of the sliced sequence
///
/// Returns:
///     Tuple (start, stop, step, slicelength)
///
/// Raises:
///     ValueError: If the slice is invalid or still symbolic
///     TypeError: If an endpoint is not an integer that fits the platform width
#[pyfunction]
fn adjust_indices(slice: &Bound<'_, PySlice>, length: usize) -> PyResult<(isize, isize, isize, usize)> {
    let adjusted = symslice_core::unpack_slice(&descriptor(slice)?)
        .and_then(|unpacked| unpacked.adjust_indices(length))
        .map_err(to_py_err)?;
    Ok((adjusted.start, adjusted.stop, adjusted.step, adjusted.len))
}

/// symslice Python module — slice unpacking with symbolic endpoints
#[pymodule]
fn symslice(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySymInt>()?;
    m.add_function(wrap_pyfunction!(unpack_slice, m)?)?;
    m.add_function(wrap_pyfunction!(adjust_indices, m)?)?;
    Ok(())
}
