mod lifecycle;
mod processors;
mod suite;
mod teardown_errors;
