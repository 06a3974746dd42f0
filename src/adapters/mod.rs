// Adapters layer: concrete implementations for the job-board APIs and the environment.

pub mod headhunter;
pub mod secrets;
pub mod superjob;
