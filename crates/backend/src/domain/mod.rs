pub mod a001_court;
