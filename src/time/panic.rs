use derive_more::{Display, Error};
use libc::c_int;

use crate::util::panic::Panic;

#[derive(Debug, Display, Error)]
#[display("pointer exceeded stack space")]
pub struct BadStackAddrPanic;
impl Panic for BadStackAddrPanic {}

#[derive(Debug, Display, Error)]
#[display("monotonic clock unsupported by the system")]
pub struct ClockUnsupportedPanic;
impl Panic for ClockUnsupportedPanic {}

#[derive(Debug, Display, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedErrorPanic(#[error(not(source))] pub c_int);
impl Panic for UnexpectedErrorPanic {}
