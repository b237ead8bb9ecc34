//! Edge case tests for posti-lex
