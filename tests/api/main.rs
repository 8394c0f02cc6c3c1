mod start;
mod task;
