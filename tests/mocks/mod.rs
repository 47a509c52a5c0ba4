pub mod functional_tester;
