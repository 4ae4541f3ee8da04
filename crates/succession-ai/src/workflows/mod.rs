pub mod succession;
