// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsed transform matrices and the vertical-translation algebra.
//!
//! Pagination moves the index element by rewriting the vertical translation
//! component of its transform. The element may already carry a transform
//! applied by other code on the page, so the offset must be *composed* with
//! the existing matrix and reserialized in the same form, not overwritten.
//!
//! Computed transforms arrive in the CSS matrix forms:
//!
//! - `matrix(a, b, c, d, e, f)` — 6 components, vertical translation at
//!   index 5,
//! - `matrix3d(m11, …, m44)` — 16 components, vertical translation at
//!   index 13.
//!
//! `translateY(Npx)` is also accepted on parse so that output written by this
//! crate round-trips through surfaces that store inline styles verbatim.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Index of the vertical translation component in the 2D matrix form.
const TY_2D: usize = 5;
/// Index of the vertical translation component in the 3D matrix form.
const TY_3D: usize = 13;

/// A parsed transform in one of the CSS matrix forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// `matrix(a, b, c, d, e, f)`.
    Matrix2d([f64; 6]),
    /// `matrix3d(...)` with 16 components in column-major order.
    Matrix3d([f64; 16]),
}

/// Failure to interpret a transform value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformParseError {
    /// The value is not one of the recognized function forms.
    UnsupportedSyntax,
    /// A component was not a finite number.
    BadComponent,
    /// The function had the wrong number of components.
    WrongArity,
}

impl core::fmt::Display for TransformParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedSyntax => write!(f, "unsupported transform syntax"),
            Self::BadComponent => write!(f, "transform component is not a finite number"),
            Self::WrongArity => write!(f, "wrong number of transform components"),
        }
    }
}

impl Transform {
    /// Parses a computed transform value.
    ///
    /// Returns `Ok(None)` for `none` or an empty value (no transform applied),
    /// `Ok(Some(_))` for the recognized function forms, and an error for
    /// anything else. Callers that only need the baseline vertical offset can
    /// treat an error as offset `0` (see [`vertical_offset_of`]).
    pub fn from_css(value: &str) -> Result<Option<Self>, TransformParseError> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        if let Some(args) = function_args(value, "matrix3d") {
            let parts = parse_components(args)?;
            let m: [f64; 16] = parts
                .try_into()
                .map_err(|_| TransformParseError::WrongArity)?;
            return Ok(Some(Self::Matrix3d(m)));
        }
        if let Some(args) = function_args(value, "matrix") {
            let parts = parse_components(args)?;
            let m: [f64; 6] = parts
                .try_into()
                .map_err(|_| TransformParseError::WrongArity)?;
            return Ok(Some(Self::Matrix2d(m)));
        }
        if let Some(args) = function_args(value, "translateY") {
            let y = parse_px(args)?;
            return Ok(Some(Self::Matrix2d([1.0, 0.0, 0.0, 1.0, 0.0, y])));
        }
        Err(TransformParseError::UnsupportedSyntax)
    }

    /// The vertical translation component.
    #[must_use]
    pub fn translate_y(&self) -> f64 {
        match self {
            Self::Matrix2d(m) => m[TY_2D],
            Self::Matrix3d(m) => m[TY_3D],
        }
    }

    /// Replaces the vertical translation component, keeping the matrix form.
    pub fn set_translate_y(&mut self, y: f64) {
        match self {
            Self::Matrix2d(m) => m[TY_2D] = y,
            Self::Matrix3d(m) => m[TY_3D] = y,
        }
    }

    /// Serializes back to the CSS form this transform was parsed from.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Matrix2d(m) => format!(
                "matrix({}, {}, {}, {}, {}, {})",
                m[0], m[1], m[2], m[3], m[4], m[5]
            ),
            Self::Matrix3d(m) => {
                let mut out = String::from("matrix3d(");
                for (i, v) in m.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    // `f64` Display is stable and locale-free.
                    out.push_str(&format!("{v}"));
                }
                out.push(')');
                out
            }
        }
    }
}

/// Serializes a pure vertical translation, used when the element carries no
/// matrix to compose with.
#[must_use]
pub fn translate_y_css(y: f64) -> String {
    format!("translateY({y}px)")
}

/// Baseline vertical offset of a computed transform value.
///
/// Absent, `none`, and unparseable values all yield `0.0`: an element whose
/// transform we cannot interpret is paged from its natural position.
#[must_use]
pub fn vertical_offset_of(value: Option<&str>) -> f64 {
    match value {
        Some(v) => match Transform::from_css(v) {
            Ok(Some(t)) => t.translate_y(),
            _ => 0.0,
        },
        None => 0.0,
    }
}

/// Returns the argument list of `name(args)` if `value` has exactly that form.
fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    let rest = value.strip_prefix(name)?;
    let rest = rest.trim_start();
    let inner = rest.strip_prefix('(')?;
    inner.trim_end().strip_suffix(')')
}

fn parse_components(args: &str) -> Result<Vec<f64>, TransformParseError> {
    args.split(',')
        .map(|part| {
            let v: f64 = part
                .trim()
                .parse()
                .map_err(|_| TransformParseError::BadComponent)?;
            if v.is_finite() {
                Ok(v)
            } else {
                Err(TransformParseError::BadComponent)
            }
        })
        .collect()
}

fn parse_px(args: &str) -> Result<f64, TransformParseError> {
    let raw = args.trim();
    let raw = raw.strip_suffix("px").unwrap_or(raw);
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| TransformParseError::BadComponent)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TransformParseError::BadComponent)
    }
}
