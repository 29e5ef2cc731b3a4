mod csv_parser_test;
