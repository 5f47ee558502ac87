mod batch;
mod execute;
