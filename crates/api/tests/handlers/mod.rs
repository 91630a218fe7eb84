mod availability_test;
