mod traffic_tests;
