/// Use cases module containing application business logic orchestration
mod check_freshness;

pub use check_freshness::CheckFreshnessUseCase;
