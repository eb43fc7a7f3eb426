mod tests_sections;
