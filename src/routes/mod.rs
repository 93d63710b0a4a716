pub mod item;
pub mod task;

use crate::error::AppError;

// unmatched routes and methods answer in the same JSON shape as every other error
async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
