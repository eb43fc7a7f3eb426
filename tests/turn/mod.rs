mod tests_turn;
