mod tests_cst;
mod tests_error_display;
mod tests_tokenizer;
