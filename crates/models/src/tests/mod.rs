mod crud_tests;
mod constraint_tests;
