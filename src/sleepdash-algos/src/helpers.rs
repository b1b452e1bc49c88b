pub mod ratio_math;
