// This file is required to make `cargo test` discover tests in subdirectories.

#[cfg(test)]
mod markdown;

#[cfg(test)]
mod operations;

#[cfg(test)]
mod render;

#[cfg(test)]
mod validation;
