#[cfg(test)]
mod tests {
    use std::io::Read;

    use hmacdrbg::{
        DrbgError, DrbgHmacSha256, DrbgHmacSha384, DrbgPrHmacSha256, DrbgReader, Entropy,
        MAX_BYTES_PER_GENERATE,
    };
    use rand_core::TryRngCore;
    use sha2::{Digest, Sha256};

    #[derive(Default)]
    struct MockEntropy {
        bytes: Vec<Vec<u8>>,
        pos: usize,
    }

    impl MockEntropy {
        fn new(inputs: &[&str]) -> Self {
            Self {
                bytes: inputs.iter().map(|input| hex::decode(input).unwrap()).collect(),
                pos: 0,
            }
        }
    }

    impl Entropy for MockEntropy {
        type Error = std::convert::Infallible;

        fn fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Self::Error> {
            let entropy = &self.bytes[self.pos];
            bytes.copy_from_slice(entropy);
            self.pos += 1;
            Ok(())
        }
    }

    fn generate_hex(drbg: &mut DrbgHmacSha256, len: usize) -> String {
        let mut bytes = vec![0; len];
        drbg.generate(&mut bytes, None).unwrap();
        hex::encode(bytes)
    }

    const SEED: &str = "b0a1f6d9707cc52b876d4a0ed0dd11718827f86f2c2405f7f9e068d9f5439e48531655d5b0d8170a389d9c176748f3f5";

    #[test]
    fn test_basic() {
        let seed = hex::decode(SEED).unwrap();
        let mut drbg = DrbgHmacSha256::instantiate(256, &seed, None).unwrap();

        assert_eq!(generate_hex(&mut drbg, 13), "550a8ad9e22d359c31e356efda");
        assert_eq!(
            generate_hex(&mut drbg, 33),
            "16610f2eb23ccfde34fda35458cdeafc661ea67eb89c19223a28aab8353f322c7c"
        );
        assert_eq!(
            generate_hex(&mut drbg, 333),
            "e16bd5223256eab3f11ead68fa217e529307f5553ceecbfe96d8e2963d0d3f4b\
             8588dec6d7d9410f1b4e3441c088e5a4d4441b8b74e23ad7f3c5312df3211601\
             c79ee27a09dd0fc75f60d760b5c0ac0d72dd51161cb210703f0b5a307e62a144\
             79d895c1ae73b8e3a694d8ec3d6655b949ea46b9ec07f3212de636ea717d6bb4\
             8ea5792534d1c42abaab79a761ef6b4f658d0b0c780f224a447ba63962c2943b\
             721a44402fe1ffa667d3dbca7166aa356eba8d1fe1b5f5a5eed3c2d5139381b3\
             ce12a3d11a3714e41639bf315810b3fd2ce5ab4086a1ea6827fb4c9d9680625f\
             46858cf76d0622a4e9faf2507483208b632cd30817d459c4135d815f3c642188\
             bee0eabd86f5c3faf622a5406873378eb6f59bd8fce24d3c17397af919f3f60d\
             2b7f45fbccc205b477f38df6b0861bd155fbbdc11ea48dda7a1762b4133035b7\
             a95b6becb17b4cdda86eed667c"
        );
    }

    #[test]
    fn test_personalization_and_reseed() {
        let seed = hex::decode(
            "c081232e6627b050e05a34cba6de97f6410a5e52739316443026cb2a40b5fe7648cea25464a79226bf97ef626a1a2579",
        )
        .unwrap();
        let personalization = hex::decode("d5ae166c587fd664e1a9e32b29").unwrap();
        let reseed = hex::decode(
            "a7428e1be103930fed246c5e934a4bf5685a340e16db08c0ffef857332f1d96464f12f8da7a5ddfcb76cb6",
        )
        .unwrap();

        let mut drbg = DrbgHmacSha256::instantiate(256, &seed, Some(&personalization)).unwrap();
        assert_eq!(generate_hex(&mut drbg, 13), "52292951368094b5a6c4af0346");

        drbg.reseed(&reseed, None).unwrap();
        assert_eq!(
            generate_hex(&mut drbg, 33),
            "1371416f080b0b0471678e80f4a5c23f614a1937c45f1eb7a60b7cc13a03af4579"
        );
    }

    // CAVP HMAC_DRBG, SHA-256, no prediction resistance, reseed before generating.
    #[test]
    fn test_nist_builder() {
        let entropy = MockEntropy::new(&[
            "fa0ee1fe39c7c390aa94159d0de97564342b591777f3e5f6a4ba2aea342ec840",
            "e0629b6d7975ddfa96a399648740e60f1f9557dc58b3d7415f9ba9d4dbb501f6",
        ]);
        let mut drbg = DrbgHmacSha256::builder()
            .entropy(entropy)
            .nonce(&hex::decode("dd0820655cb2ffdb0da9e9310a67c9e5").unwrap())
            .personalization_string(
                &hex::decode("f2e58fe60a3afc59dad37595415ffd318ccf69d67780f6fa0797dc9aa43e144c")
                    .unwrap(),
            )
            .build()
            .unwrap();
        drbg.reseed_from_entropy(None).unwrap();

        let mut bytes = vec![0; 128];
        drbg.generate(&mut bytes, None).unwrap();
        drbg.generate(&mut bytes, None).unwrap();
        assert_eq!(
            hex::encode(bytes),
            "f92d4cf99a535b20222a52a68db04c5af6f5ffc7b66a473a37a256bd8d298f9b\
             4aa4af7e8d181e02367903f93bdb744c6c2f3f3472626b40ce9bd6a70e7b8f93\
             992a16a76fab6b5f162568e08ee6c3e804aefd952ddd3acb791c50f2ad69e9a0\
             4028a06a9c01d3a62aca2aaf6efe69ed97a016213a2dd642b4886764072d9cbe"
        );
    }

    #[test]
    fn test_all_generation_lengths() {
        let mut drbg = DrbgHmacSha256::instantiate(256, &[b'a'; 48], None).unwrap();
        let mut hasher = Sha256::new();
        let mut buf = vec![0; MAX_BYTES_PER_GENERATE];
        for n in 1..=MAX_BYTES_PER_GENERATE {
            drbg.generate(&mut buf[..n], None).unwrap();
            hasher.update(&buf[..n]);
        }
        assert_eq!(
            hex::encode(hasher.finalize()),
            "ee5fb7498d044ad52dac5a4e6446da71a253d024985f4969dad8590e93890be3"
        );
    }

    #[test]
    fn test_reader() {
        let drbg = DrbgHmacSha256::instantiate(256, &[b'a'; 48], None).unwrap();
        let mut reader = DrbgReader::new(drbg);
        let mut hasher = Sha256::new();
        let mut buf = [0; 3];
        for _ in 0..MAX_BYTES_PER_GENERATE {
            assert_eq!(reader.read(&mut buf).unwrap(), 3);
            hasher.update(buf);
        }
        assert_eq!(
            hex::encode(hasher.finalize()),
            "48dd72451290c1945261653dc11542b82b6903e458315020805d560ce125f534"
        );
    }

    #[test]
    fn test_rejected_lengths_leave_state() {
        let seed = hex::decode(SEED).unwrap();
        let mut drbg = DrbgHmacSha256::instantiate(256, &seed, None).unwrap();

        assert!(matches!(
            drbg.generate(&mut [], None),
            Err(DrbgError::InvalidRequestLength { requested: 0, .. })
        ));
        let mut too_long = vec![0; MAX_BYTES_PER_GENERATE + 1];
        assert!(matches!(
            drbg.generate(&mut too_long, None),
            Err(DrbgError::InvalidRequestLength {
                requested,
                max: MAX_BYTES_PER_GENERATE,
            }) if requested == MAX_BYTES_PER_GENERATE + 1
        ));
        assert!(too_long.iter().all(|&byte| byte == 0));

        assert_eq!(generate_hex(&mut drbg, 13), "550a8ad9e22d359c31e356efda");
    }

    #[test]
    fn test_reseed_interval() {
        let seed = hex::decode(SEED).unwrap();
        let mut drbg = DrbgHmacSha256::instantiate(256, &seed, None).unwrap();
        drbg.set_reseed_interval(2).unwrap();

        let mut bytes = [0; 13];
        drbg.generate(&mut bytes, None).unwrap();
        drbg.generate(&mut bytes, None).unwrap();
        assert!(matches!(
            drbg.generate(&mut bytes, None),
            Err(DrbgError::ReseedRequired)
        ));
        assert!(matches!(
            drbg.generate(&mut bytes, Some(b"more")),
            Err(DrbgError::ReseedRequired)
        ));

        drbg.reseed(b"fresh entropy input for the next run", None)
            .unwrap();
        drbg.generate(&mut bytes, None).unwrap();
    }

    #[test]
    fn test_reseed_changes_output() {
        let seed = hex::decode(SEED).unwrap();
        let mut a = DrbgHmacSha256::instantiate(256, &seed, None).unwrap();
        let mut b = DrbgHmacSha256::instantiate(256, &seed, None).unwrap();
        let mut c = DrbgHmacSha256::instantiate(256, &seed, None).unwrap();
        a.reseed(b"first entropy input", None).unwrap();
        b.reseed(b"second entropy input", None).unwrap();

        let (a, b, c) = (
            generate_hex(&mut a, 64),
            generate_hex(&mut b, 64),
            generate_hex(&mut c, 64),
        );
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_determinism_and_independence() {
        let seed = hex::decode(SEED).unwrap();
        let mut a = DrbgHmacSha384::instantiate(256, &seed, Some(b"pers")).unwrap();
        let mut b = DrbgHmacSha384::instantiate(256, &seed, Some(b"pers")).unwrap();

        let mut first = [0; 100];
        let mut second = [0; 100];
        a.generate(&mut first, Some(b"ai")).unwrap();
        b.generate(&mut second, Some(b"ai")).unwrap();
        assert_eq!(first, second);

        // Reseeding one instance leaves the other alone.
        a.reseed(b"entropy", None).unwrap();
        a.generate(&mut first, None).unwrap();
        b.generate(&mut second, None).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_fill_bytes_chunks_requests() {
        let seed = hex::decode(SEED).unwrap();
        let mut filled = DrbgHmacSha256::instantiate(256, &seed, None).unwrap();
        let mut direct = DrbgHmacSha256::instantiate(256, &seed, None).unwrap();

        let mut bytes = vec![0; 2000];
        filled.fill_bytes_with_ai(&mut bytes, b"ai").unwrap();

        let mut expected = vec![0; 2000];
        for block in expected.chunks_mut(MAX_BYTES_PER_GENERATE) {
            direct.generate(block, Some(b"ai")).unwrap();
        }
        assert_eq!(bytes, expected);
        assert_eq!(filled.reseed_counter(), 4);

        filled.fill_bytes(&mut []).unwrap();
        assert_eq!(filled.reseed_counter(), 4);
    }

    #[test]
    fn test_prediction_resistance() {
        let entropy = MockEntropy::new(&[
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            "202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f",
            "404142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f",
        ]);
        let mut drbg = DrbgPrHmacSha256::builder()
            .entropy(entropy)
            .nonce(&hex::decode("a0a1a2a3a4a5a6a7a8a9aaabacadaeaf").unwrap())
            .personalization_string(b"prediction resistance")
            .build()
            .unwrap();

        let mut bytes = [0; 40];
        drbg.fill_bytes_with_ai(&mut bytes, b"additional input")
            .unwrap();
        assert_eq!(
            hex::encode(bytes),
            "ce5c8281128a4c9e035fd4fa46a596cb221d3ae775ff171a8ec35e5aa20fba6c74a22d93c073af3a"
        );
        drbg.fill_bytes(&mut bytes).unwrap();
        assert_eq!(
            hex::encode(bytes),
            "cf62a8850fd1256d3de3685375e57dce62f3f790e808d8f2c09e4536f0490daa6c5f60b73bf4990f"
        );
    }

    #[test]
    fn test_interval_reseeds_from_entropy() {
        let entropy = MockEntropy::new(&[
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            "202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f",
        ]);
        let mut drbg = DrbgHmacSha256::builder()
            .entropy(entropy)
            .nonce(&hex::decode("a0a1a2a3a4a5a6a7a8a9aaabacadaeaf").unwrap())
            .personalization_string(b"prediction resistance")
            .reseed_interval(1)
            .build()
            .unwrap();

        let mut bytes = [0; 40];
        drbg.fill_bytes_with_ai(&mut bytes, b"additional input")
            .unwrap();
        assert_eq!(
            hex::encode(bytes),
            "fbf9690b2240a75ebc677879827f183303f6dbedbc1516beb0cfd0ad35b326de87f0fad2cf0b8019"
        );
        drbg.fill_bytes_with_ai(&mut bytes, b"additional input")
            .unwrap();
        assert_eq!(
            hex::encode(bytes),
            "a3cc5e65e1f320394b42745cca3c014e171b6481c37704fbf2f4cb729ee591559f02dc238f96ee2c"
        );
        assert_eq!(drbg.reseed_counter(), 2);
    }

    #[test]
    fn test_try_rng_core() {
        let seed = hex::decode(SEED).unwrap();
        let mut rng = DrbgHmacSha256::instantiate(256, &seed, None).unwrap();
        let mut direct = DrbgHmacSha256::instantiate(256, &seed, None).unwrap();

        let mut bytes = [0; 4];
        direct.generate(&mut bytes, None).unwrap();
        assert_eq!(rng.try_next_u32().unwrap(), u32::from_le_bytes(bytes));
    }
}
