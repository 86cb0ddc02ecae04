mod propfind_tests;
