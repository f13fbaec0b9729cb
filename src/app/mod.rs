// Application layer: presentation of polling results.

pub mod report;
