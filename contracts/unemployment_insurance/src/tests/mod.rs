mod test_registration;
