pub mod helper;

mod operator_swap_test;
