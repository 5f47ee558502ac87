mod escape;
mod validate;
