// Copyright (c) 2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The error module contains the errors that may be returned when converting
//! geocentric Cartesian coordinates or parsing datum names.

use thiserror::Error;

/// The errors returned by the geodetic conversion functions.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The Cartesian to geodetic iteration did not converge.
    #[error("geodetic latitude did not converge after {iterations} iterations")]
    NotConverged {
        /// The number of iterations performed.
        iterations: u32,
    },

    /// The Cartesian vector is non-finite or too close to the Earth's centre
    /// to have a unique geodetic position.
    #[error("degenerate geocentric vector")]
    DegenerateVector,

    /// The datum name is not in the datum table.
    #[error("unsupported datum")]
    UnsupportedDatum,
}

/// A `Result` with the crate `Error`.
pub type Result<T> = core::result::Result<T, Error>;
