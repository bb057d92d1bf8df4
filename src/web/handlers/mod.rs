// Route handlers, one module per endpoint.

pub mod matching;
