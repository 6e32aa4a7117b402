mod conjugator_tests;
