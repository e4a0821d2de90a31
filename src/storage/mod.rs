pub mod write_pbm;
