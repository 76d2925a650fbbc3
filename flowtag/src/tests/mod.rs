mod flow_parser_test;
