mod common;
mod eligibility;
mod engine;
