use std::os::raw::c_int;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::ffi;
use pyo3::prelude::*;
use pyo3::types::{PyString, PyStringData};

macro_rules! debug_println {
    ($($arg:tt)*) => {
        if std::env::var("DEBUG").is_ok() {
            eprintln!($($arg)*);
        }
    };
}
pub(crate) use debug_println;

pub mod batch;
pub mod codepoint;
pub mod compat;
pub mod host;
pub mod text;

use codepoint::{CodePoint, MAX_CODE_POINT};

fn check_code_point(ch: u32) -> PyResult<CodePoint> {
    if codepoint::is_code_point(ch) {
        Ok(ch)
    } else {
        Err(PyValueError::new_err(format!(
            "code point {ch:#x} is out of range (max {MAX_CODE_POINT:#x})"
        )))
    }
}

// Copy the canonical PEP-393 payload out as code points. Unlike extracting
// a `&str`, this keeps lone surrogates.
fn code_points(text: &Bound<'_, PyString>) -> PyResult<Vec<CodePoint>> {
    // the borrowed payload is copied before `text` can be released
    let data = unsafe { text.data()? };
    Ok(match data {
        PyStringData::Ucs1(chars) => chars.iter().map(|&ch| ch as CodePoint).collect(),
        PyStringData::Ucs2(chars) => chars.iter().map(|&ch| ch as CodePoint).collect(),
        PyStringData::Ucs4(chars) => chars.to_vec(),
    })
}

// Build a `str` from code points; CPython picks the narrowest kind itself.
fn new_py_string<'py>(py: Python<'py>, code_points: &[CodePoint]) -> PyResult<Bound<'py, PyString>> {
    unsafe {
        let ptr = ffi::PyUnicode_FromKindAndData(
            ffi::PyUnicode_4BYTE_KIND as c_int,
            code_points.as_ptr().cast(),
            code_points.len() as ffi::Py_ssize_t,
        );
        Ok(Bound::from_owned_ptr_or_err(py, ptr)?.downcast_into_unchecked())
    }
}

#[pyfunction]
#[pyo3(name = "to_lower_full")]
fn py_to_lower_full(ch: u32) -> PyResult<Vec<CodePoint>> {
    let ch = check_code_point(ch)?;
    Ok(compat::lower_full_vec(ch))
}

#[pyfunction]
#[pyo3(signature = (strings, jobs = 1))]
fn lower<'py>(
    py: Python<'py>,
    strings: Vec<Bound<'py, PyString>>,
    jobs: usize,
) -> PyResult<Vec<Bound<'py, PyString>>> {
    if jobs == 0 {
        return Err(PyValueError::new_err("jobs must be > 0"));
    }

    let items = strings.iter().map(code_points).collect::<PyResult<Vec<_>>>()?;

    let lowered = py
        .allow_threads(|| {
            batch::map_items(&items, jobs, || {
                |cps: &Vec<CodePoint>| text::lower_full_code_points(cps)
            })
        })
        .map_err(|e| PyRuntimeError::new_err(format!("failed to build worker pool: {e}")))?;

    lowered.iter().map(|cps| new_py_string(py, cps)).collect()
}

#[pyclass(name = "IgnoreCaseAlignment", module = "casecompat", frozen)]
struct PyIgnoreCaseAlignment {
    inner: text::IgnoreCaseAlignment,
}

#[pymethods]
impl PyIgnoreCaseAlignment {
    #[new]
    fn new(text: &Bound<'_, PyString>) -> PyResult<Self> {
        Ok(PyIgnoreCaseAlignment {
            inner: text::IgnoreCaseAlignment::from_code_points(&code_points(text)?),
        })
    }

    #[getter]
    fn lowercase<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyString>> {
        new_py_string(py, self.inner.lowercase())
    }

    fn alignment_array(&self) -> Vec<usize> {
        self.inner.alignment().to_vec()
    }

    fn source_index(&self, idx: usize) -> Option<usize> {
        self.inner.source_index(idx)
    }

    fn __len__(&self) -> usize {
        self.inner.char_len()
    }

    fn __repr__(&self, py: Python<'_>) -> PyResult<String> {
        let lowercase = self.lowercase(py)?.repr()?;
        Ok(format!("IgnoreCaseAlignment({lowercase})"))
    }
}

#[pyfunction]
fn ignore_case_alignment(text: &Bound<'_, PyString>) -> PyResult<PyIgnoreCaseAlignment> {
    PyIgnoreCaseAlignment::new(text)
}

#[pymodule]
fn casecompat(m: &Bound<'_, PyModule>) -> PyResult<()> {
    debug_println!("casecompat init, case api {}", host::CASE_API);

    m.add("__doc__", "Full lowercase mapping on every host case API")?;
    m.add("CASE_API", host::CASE_API)?;
    m.add("MAX_LOWER_EXPANSION", codepoint::MAX_LOWER_EXPANSION)?;

    m.add_function(wrap_pyfunction!(py_to_lower_full, m)?)?;
    m.add_function(wrap_pyfunction!(lower, m)?)?;
    m.add_function(wrap_pyfunction!(ignore_case_alignment, m)?)?;
    m.add_class::<PyIgnoreCaseAlignment>()?;
    Ok(())
}
