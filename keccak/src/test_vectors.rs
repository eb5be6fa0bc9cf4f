//! Intermediate states for one SHA3-256 block holding
//! `"The quick brown fox jumps over the lazy dog"`, one row of lanes per line.

/// The padded block XORed into the zero state.
pub(crate) const ABSORBED: [u64; 25] = [
    0x6369757120656854, 0x206e776f7262206b, 0x706d756a20786f66, 0x74207265766f2073, 0x20797a616c206568,
    0x0000000006676f64, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x8000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
];

/// `theta(ABSORBED)`.
pub(crate) const THETA: [u64; 25] = [
    0x03cce1cea8814deb, 0xa3dde8ca1490f997, 0x3843e6cfbec40feb, 0x44bff3cd8e5785c5, 0x928be2e6564b4b7b,
    0x60a594bf8e834adb, 0x83b39fa566f2d9fc, 0x482e93a59ebc608d, 0x309f81a8f838a5b6, 0xb2f298873a6b2e13,
    0x60a594bf88e425bf, 0x83b39fa566f2d9fc, 0x482e93a59ebc608d, 0x309f81a8f838a5b6, 0xb2f298873a6b2e13,
    0x60a594bf88e425bf, 0x03b39fa566f2d9fc, 0x482e93a59ebc608d, 0x309f81a8f838a5b6, 0xb2f298873a6b2e13,
    0x60a594bf88e425bf, 0x83b39fa566f2d9fc, 0x482e93a59ebc608d, 0x309f81a8f838a5b6, 0xb2f298873a6b2e13,
];

/// `rho(ABSORBED)`.
pub(crate) const RHO: [u64; 25] = [
    0x6369757120656854, 0x40dceedee4c440d6, 0x9c1b5d5a881e1bd9, 0x5766f20737420726, 0x0b61032b4103cbd3,
    0x6676f64000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x0000100000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
];

/// `pi(ABSORBED)`.
pub(crate) const PI: [u64; 25] = [
    0x6369757120656854, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x74207265766f2073, 0x0000000000000000, 0x0000000000000000, 0x8000000000000000, 0x0000000000000000,
    0x206e776f7262206b, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x20797a616c206568, 0x0000000006676f64, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x706d756a20786f66, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
];

/// `chi(ABSORBED)`.
pub(crate) const CHI: [u64; 25] = [
    0x33687571207d2750, 0x246e756a2465207a, 0x70347d6a28782a6e, 0x37207775762a2867, 0x207f786f3e226543,
    0x0000000006676f64, 0x0000000000000000, 0x0000000000000000, 0x0000000006676f64, 0x0000000000000000,
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x8000000000000000, 0x0000000000000000, 0x0000000000000000, 0x8000000000000000,
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
];

/// `iota(ABSORBED, 0)`.
pub(crate) const IOTA_0: [u64; 25] = [
    0x6369757120656855, 0x206e776f7262206b, 0x706d756a20786f66, 0x74207265766f2073, 0x20797a616c206568,
    0x0000000006676f64, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x8000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
];

/// `rho(theta(ABSORBED))`.
pub(crate) const THETA_RHO: [u64; 25] = [
    0x03cce1cea8814deb, 0x47bbd1942921f32f, 0xce10f9b3efb103fa, 0xd8e5785c544bff3c, 0x32b25a5bdc945f17,
    0xe834adb60a594bf8, 0x2d9fc83b39fa566f, 0x0ba4e967af182352, 0xdb184fc0d47c1c52, 0x8873a6b2e13b2f29,
    0x052ca5fc47212dfb, 0xce7e959bcb67f20e, 0xe3046a41749d2cf5, 0x51f0714b6c613f03, 0x359709d9794c439d,
    0xc84b7ec14b297f11, 0x5b3f807673f4acde, 0x49d2cf5e3046a417, 0x351f0714b6c613f0, 0xf298873a6b2e13b2,
    0x52fe239096fd8296, 0x0ece7e959bcb67f2, 0xa905d274b3d78c11, 0xb6309f81a8f838a5, 0xa621ce9acb84ecbc,
];

/// `pi(rho(theta(ABSORBED)))`.
pub(crate) const THETA_RHO_PI: [u64; 25] = [
    0x03cce1cea8814deb, 0x2d9fc83b39fa566f, 0xe3046a41749d2cf5, 0x351f0714b6c613f0, 0xa621ce9acb84ecbc,
    0xd8e5785c544bff3c, 0x8873a6b2e13b2f29, 0x052ca5fc47212dfb, 0x5b3f807673f4acde, 0xa905d274b3d78c11,
    0x47bbd1942921f32f, 0x0ba4e967af182352, 0x51f0714b6c613f03, 0xf298873a6b2e13b2, 0x52fe239096fd8296,
    0x32b25a5bdc945f17, 0xe834adb60a594bf8, 0xce7e959bcb67f20e, 0x49d2cf5e3046a417, 0xb6309f81a8f838a5,
    0xce10f9b3efb103fa, 0xdb184fc0d47c1c52, 0x359709d9794c439d, 0xc84b7ec14b297f11, 0x0ece7e959bcb67f2,
];

/// `chi(pi(rho(theta(ABSORBED))))`.
pub(crate) const THETA_RHO_PI_CHI: [u64; 25] = [
    0xc1ccc38eec84657b, 0x3984cd2fbbb8456f, 0x6124a2cb3d9dc0f9, 0x34d3265096c712b3, 0x8a32c6abdafefeb8,
    0xdde97910524bffee, 0xd260a6b0d1efaf2d, 0xa52cf7fcc7222dfa, 0x0bdfa87e37fcdff2, 0xa91754d612e78c10,
    0x17ebc19c6940ef2e, 0xa9ac6f57ac1623e2, 0x519651cbf8b0bf07, 0xf799573e422e629b, 0x5afa0bf310e582c6,
    0x34f84a521db2ef11, 0xe9b4e7f23a594fe9, 0x785e851a43dfeaae, 0x49508f046442e305, 0x7e343a25aab1384d,
    0xea97f9aac6b14077, 0x135039c0d65d2052, 0x331309cde98e437f, 0x085bffe32f197f19, 0x1fc678d58b877bf2,
];

/// One full round, i.e. `iota(THETA_RHO_PI_CHI, 0)`.
pub(crate) const ROUNDS_1: [u64; 25] = [
    0xc1ccc38eec84657a, 0x3984cd2fbbb8456f, 0x6124a2cb3d9dc0f9, 0x34d3265096c712b3, 0x8a32c6abdafefeb8,
    0xdde97910524bffee, 0xd260a6b0d1efaf2d, 0xa52cf7fcc7222dfa, 0x0bdfa87e37fcdff2, 0xa91754d612e78c10,
    0x17ebc19c6940ef2e, 0xa9ac6f57ac1623e2, 0x519651cbf8b0bf07, 0xf799573e422e629b, 0x5afa0bf310e582c6,
    0x34f84a521db2ef11, 0xe9b4e7f23a594fe9, 0x785e851a43dfeaae, 0x49508f046442e305, 0x7e343a25aab1384d,
    0xea97f9aac6b14077, 0x135039c0d65d2052, 0x331309cde98e437f, 0x085bffe32f197f19, 0x1fc678d58b877bf2,
];

/// Two rounds.
pub(crate) const ROUNDS_2: [u64; 25] = [
    0xab68a95459c33e1c, 0xd826db89a7f1d3d9, 0x8bc481402fe5f053, 0x12cfd02faed06b8e, 0x90308c1619430f07,
    0x5c75885a4da5b3c9, 0xc558bb00e11bd42a, 0xc7fd78bf30089653, 0x409358d20a6eed4d, 0xb21a631bb032fc7b,
    0xf3246a954f12f0e0, 0x865f9e6d58770b0f, 0xc4b2423dc0722f51, 0x4a06261ee7aee26c, 0x50da3fa8ceaf048d,
    0x4902a086a96d79f5, 0xf4a014884855514e, 0xc23fa880bc5ac506, 0x871e94851d9f44f3, 0xde46d3c875e4d2e9,
    0xebad1ec39258e00b, 0xe4d309c85c761a80, 0xd0585db83229fcc4, 0xf485a4fa8808b12b, 0xed0924be6d962f35,
];

/// The full permutation.
pub(crate) const ROUNDS_24: [u64; 25] = [
    0x8c5c9701da0d0769, 0x3982b2a1ad3a0c12, 0xf432cfa92f037f4e, 0x04fc7d89a05922cb, 0xa8a128625744f9d3,
    0xc9221ad71596bc41, 0xf6a37120c3181ec2, 0xd1b97886e5792cce, 0x2d3e81a68317aa06, 0xfb341d1e04787ede,
    0x98ba8b19bdd3a798, 0xf62b60463c0e331d, 0xae6cf89136e122bc, 0x8569393210d2fc0b, 0xe4579cdf2bace76b,
    0x0cb5b834bba6cae7, 0x041955a655a5a6d6, 0x49050bf4ef3f7c5d, 0x07378d4d5bd75cd5, 0xf45702cf9efcecfb,
    0x04360d90551b48c7, 0xc2f7c859281953f7, 0x9989e780a15686d9, 0x8f230b69ab3bf537, 0xd548712df08fd6fc,
];

/// Keccak-f[1600] applied once to the zero state.
pub(crate) const ZERO_PERMUTED: [u64; 25] = [
    0xf1258f7940e1dde7, 0x84d5ccf933c0478a, 0xd598261ea65aa9ee, 0xbd1547306f80494d, 0x8b284e056253d057,
    0xff97a42d7f8e6fd4, 0x90fee5a0a44647c4, 0x8c5bda0cd6192e76, 0xad30a6f71b19059c, 0x30935ab7d08ffc64,
    0xeb5aa93f2317d635, 0xa9a6e6260d712103, 0x81a57c16dbcf555f, 0x43b831cd0347c826, 0x01f22f1a11a5569f,
    0x05e5635a21d9ae61, 0x64befef28cc970f2, 0x613670957bc46611, 0xb87c5a554fd00ecb, 0x8c3ee88a1ccf32c8,
    0x940c7922ae3a2614, 0x1841f924a2c509e4, 0x16f53526e70465c2, 0x75f644e97f30a13b, 0xeaf1ff7b5ceca249,
];

/// Keccak-f[1600] applied twice to the zero state.
pub(crate) const ZERO_PERMUTED_TWICE: [u64; 25] = [
    0x2d5c954df96ecb3c, 0x6a332cd07057b56d, 0x093d8d1270d76b6c, 0x8a20d9b25569d094, 0x4f9c4f99e5e7f156,
    0xf957b9a2da65fb38, 0x85773dae1275af0d, 0xfaf4f247c3d810f7, 0x1f1b9ee6f79a8759, 0xe4fecc0fee98b425,
    0x68ce61b6b9ce68a1, 0xdeea66c4ba8f974f, 0x33c43d836eafb1f5, 0xe00654042719dbd9, 0x7cf8a9f009831265,
    0xfd5449a6bf174743, 0x97ddad33d8994b40, 0x48ead5fc5d0be774, 0xe3b8c8ee55b7b03c, 0x91a0226e649e42e9,
    0x900e3129e7badd7b, 0x202a9ec5faa3cce8, 0x5b3402464e1c3db6, 0x609f4e62a44c1059, 0x20d06cd26a8fbf5c,
];

/// Column parities of `ABSORBED`.
pub(crate) const THETA_C: [u64; 5] = [
    0x6369757126020730, 0xa06e776f7262206b, 0x706d756a20786f66, 0x74207265766f2073, 0x20797a616c206568,
];

/// Theta effect computed from `THETA_C`.
pub(crate) const THETA_D: [u64; 5] = [
    0x60a594bf88e425bf, 0x83b39fa566f2d9fc, 0x482e93a59ebc608d, 0x309f81a8f838a5b6, 0xb2f298873a6b2e13,
];
