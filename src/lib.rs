pub mod errors;
pub mod gc;
pub mod report;
mod runner;
pub mod seq;

use crate::errors::GcError;

pub fn run() -> Result<(), GcError> {
    runner::run()
}
