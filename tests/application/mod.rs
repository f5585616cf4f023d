mod media_normalizer_test;
