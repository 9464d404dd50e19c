mod retag_tests;
