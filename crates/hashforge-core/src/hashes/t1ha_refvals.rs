//! Published t1ha known-answer tables (81 probes per variant).

pub(crate) const REFVAL_32LE: [u64; 81] = [
    0, 0xc92229c10faea50e, 0x3df1354b0dfdc443, 0x968f016d60417bb3,
    0x85aafb50c6da770f, 0x66cce3bb6842c7d6, 0xddaa39c11537c226, 0x35958d281f0c9c8c,
    0x8c5d64b091de608e, 0x4094df680d39786b, 0x1014f4aa2a2edf4d, 0x39d21891615aa310,
    0x7ef51f67c398c7c4, 0x06163990ddbf319d, 0xe229caa00c8d6f3f, 0xd2240b4b0d54e0f5,
    0xea2e7e905ddeaf94, 0x8d4f8a887183a5ce, 0x44337f9a63c5820c, 0x94938d1e86a9b797,
    0x96e9caba5ca210cc, 0x6efbb9cc9e8f7708, 0x3d12ea0282fb8bbc, 0x5da781ee205a2c48,
    0xfa4a51a12677fe12, 0x81d5f04e20660b28, 0x57258d043bcd3841, 0x5c9beb62059c1ed2,
    0x57a02162f9034b33, 0xba2a13e457ce19b8, 0xe593263bf9451f3a, 0x0bc1175539606bc5,
    0xa3e2929e9c5f289f, 0x86bdbd06835e35f7, 0xa180950ab48baadc, 0x7812c994d9924028,
    0x308366011415f46b, 0x77fe9a9991c5f959, 0x925c340b70b0b1e3, 0xcd9c5ba4c41e2e10,
    0x7cc4e7758b94cd93, 0x898b235962ea4625, 0xd7e3e5bf22893286, 0x396f4cdd33056c64,
    0x740ab2e32f17cd9f, 0x60d12ff9cd15b321, 0xbee3a6c9903a81d8, 0xb47040913b33c35e,
    0x19ee8c2acc013cff, 0x5dec94c5783b55c4, 0x78dc122d562c5f1d, 0x6520f008da1c181e,
    0x77caf155a36ebf7c, 0x0a09e02bdb883ca6, 0xfd5d9ada7e3fb895, 0xc6f5fdd9eeab83b5,
    0x84589bb29f52a92a, 0x9b2517f13f8e9814, 0x6f752af6a52e31ec, 0x8e717799e324ce8a,
    0x84d90aef39262d58, 0x79c27b13fc28944d, 0xe6d6df6438e0044a, 0x51b603e400d79ca4,
    0x6a902b28c588b390, 0x8d7f8de9e6cb1d83, 0xcf1a4dc11ca7f044, 0xef02e43c366786f1,
    0x89915bcdbcfbe30f, 0x5928b306f1a9cc7f, 0xa8b59092996851c5, 0x22050a20427e8b25,
    0x6e6d64018941e7ee, 0x9798c898b81ae846, 0x80ef218cdc30124a, 0xfce45e60d55b0284,
    0x4010e735d3147c35, 0xeb647d999fd8dc7e, 0xd3544dcab14fe907, 0xb588b27d8438700c,
    0xa49ebfc43e057a4c,
];

pub(crate) const REFVAL_32BE: [u64; 81] = [
    0, 0xc92229c10faea50e, 0x0fe212630dd87e0f, 0x968f016d60417bb3,
    0xe6b12b2c889913ab, 0xaa3787887a9da368, 0x06ee7202d53cef39, 0x6149afb2c296664b,
    0x86c893210f9a5805, 0x8379e5da988aa04c, 0x24763aa7ce411a60, 0x9cf9c64b395a4cf8,
    0xffc192c338dde904, 0x094575bab319e5f5, 0xbbbacfe7728c6511, 0x36b8c3cebe4ef409,
    0xaa0ba8a3397ba4d0, 0xf9f85cf7124ee653, 0x3adf4f7df2a887ae, 0xaa2a0f5964aa9a7a,
    0xf18b563f42d36eb8, 0x034366cef8334f5c, 0xae2e85180e330e5f, 0xa5ce9fbfdf5c65b8,
    0x5e509f25a9ca9b0b, 0xe30d1358c2013bd2, 0xbb3a04d5eb8111fe, 0xb04234e82a15a28d,
    0x87426a56d0ea0e2f, 0x095086668e07f9f8, 0xf4cd3a43b6a6aea5, 0x73f9b9b674d472a6,
    0x558344229a1e4dcf, 0x0ad4c95b2279181a, 0x5e3d19d80821ca6b, 0x652492d25beba258,
    0xefa84b02eab849b1, 0x81ad2d253059ac2c, 0x1400ccb0dfb2f457, 0x5688dc72a839860e,
    0x67cc130e0fd1b0a7, 0x0a851e3a94e21e69, 0x2ea0000b6a073907, 0xae9776ff9bf1d02e,
    0xc0a96b66b160631c, 0xa93341de4ed7c8f0, 0x6fbadd8f5b85e141, 0xb7d295f1c21e0cba,
    0x6d6114591b8e434f, 0xf5b6939b63d97be7, 0x3c80d5053f0e5db4, 0xac520acc6b73f62d,
    0xd1051f5841cf3966, 0x62245aea644ae760, 0x0cd56be15497c62d, 0x5bb93435c4988fb6,
    0x5fadb88eb18db512, 0xc897cae2242475cc, 0xf1a094ef846dc9bb, 0x2b1d8b24924f79b6,
    0xc6df0c0e8456eb53, 0xe6a40128303a9b9c, 0x64d37af5effa7bd9, 0x90feb70a5ae2a598,
    0xec3ba5f126d9ff4b, 0x3121c8ec3ac51b29, 0x3b41c4d422166ec1, 0xb4878ddcbf48ed76,
    0x5cb850d77cb762e4, 0x9a27a43cc1dd171f, 0x2fdffc6f99cb424a, 0xf54a57e09fdea7bb,
    0x5f78e5ee2cab7039, 0xb8ba95883db31cba, 0x131c61eb84af86c3, 0x84b1f64e9c613da7,
    0xe94c1888c0c37c02, 0xea08f8bfb2039cde, 0xccc6d04d243ec753, 0x8977d105298b0629,
    0x7aaa976494a5905e,
];

pub(crate) const REFVAL_64LE: [u64; 81] = [
    0, 0x6a580668d6048674, 0xa2fe904aff0d0879, 0xe3ab9c06faf4d023,
    0x6af1c60874c95442, 0xb3557e561a6c5d82, 0x0ae73c696f3d37c0, 0x5ef25f7062324941,
    0x9b784f3b4ce6af33, 0x6993bb206a74f070, 0xf1e95df109076c4c, 0x4e1eb70c58e48540,
    0x5fdd7649d8ec44e4, 0x559122c706343421, 0x380133d58665e93d, 0x9ce74296c8c55ae4,
    0x3556f9a5757ab6d0, 0xf62751f7f25c469e, 0x851eec67f6516d94, 0xed463ee3848a8695,
    0xdc8791feff8ed3ac, 0x2569c744e1a282cf, 0xf90eb7c1d70a80b9, 0x68dfa6a1b8050a4c,
    0x94cca5e8210d2134, 0xf5cc0beabc259f52, 0x40dbc1f51618fda7, 0x0807945bf0fb52c6,
    0xe5ef7e09de70848d, 0x63e1df35febe994a, 0x2025e73769720d5a, 0xad6120b2b8a152e1,
    0x2a71d9f13959f2b7, 0x8a20849a27c32548, 0x0bcbc9fe3b57884e, 0x0e028d255667aead,
    0xbe66dad3043ab694, 0xb00e4c1238f9e2d4, 0x5c54bde5ae280e82, 0x0e22b86754bc3bc4,
    0x016707ebf858b84d, 0x990015fbc9e095ee, 0x8b9af0a3e71f042f, 0x6aa56e88bd380564,
    0xaace57113e681a0f, 0x19f81514afa9a22d, 0x80daba3d62beac79, 0x715210412cabbf46,
    0xd8fa0b9e9d6aa93f, 0x6c2fc5a4109fd3a2, 0x5b3e60eeb51ddcd8, 0x0a7c717017756fe7,
    0xa73773805ca31934, 0x4dbd6bb7a31e85fd, 0x24f619d3d5bc2db4, 0x3e4af35a1678d636,
    0x84a1a8df8d609239, 0x359c862cd3be4fcd, 0xcf3a39f5c27dc125, 0xc0ff62f8fd5f4c77,
    0x5e9f2493ddaa166c, 0x17424152be1ca266, 0xa78afa5ab4bbe0cd, 0x7bfb2e2cef118346,
    0x647c3e0ff3e3d241, 0x0352e4055c13242e, 0x6f42fc70eb660e38, 0x0bebad4fabf523ba,
    0x9269f4214414d61d, 0x1ca8760277e6006c, 0x7bad25a859d87b5d, 0xad645adcf7414f1d,
    0xb07f517e88d7afb3, 0xb321c06fb5ffab5c, 0xd50f162a1efdd844, 0x1dfd3d1924fbe319,
    0xdfaeab2f09ef7e78, 0xa7603b5af07a0b1e, 0x41cd044c0e5a4ee3, 0xf64d2f86e813bf33,
    0xff9fdb99305eb06a,
];

pub(crate) const REFVAL_64BE: [u64; 81] = [
    0, 0x6a580668d6048674, 0xdecc975a0e3b8177, 0xe3ab9c06faf4d023,
    0xe401fa8f1b6af969, 0x67db1dae56fb94e3, 0x1106266a09b7a073, 0x550339b1ef2c7bbb,
    0x290a2baf590045bb, 0xa182c1258c09f54a, 0x137d53c34be7143a, 0xf6d2b69c6f42bedc,
    0x39643eaf2ca2e4b4, 0x22a81f139a2c9559, 0x5b3d6aef0af33807, 0x56e3f80a68643c08,
    0x9e423be502378780, 0xcdb0986f9a5b2fd5, 0xd5b3c84e7933293f, 0xe5fb8c90399e9742,
    0x5d393c1f77b2cf3d, 0xc8c82f5b2ff09266, 0xaca0230ca6f7b593, 0xcb5805e2960d1655,
    0x7e2ad5b704d77c95, 0xc5e903cdb8b9eb5d, 0x4cc7d0d21cc03511, 0x8385df382cfb3e93,
    0xf17699d0564d348a, 0xf77ee7f8274a4c8d, 0xb9d8cee48903babe, 0xfe0ebd2a82b9cfe9,
    0xb49fb6397270f565, 0x173735c8c342108e, 0xa37c7fbbeec0a2ea, 0xc13f66f462bb0b6e,
    0x0c04f3c2b551467e, 0x76a9cb156810c96e, 0x2038850919b0b151, 0xcea19f2b6eed647b,
    0x6746656d2fa109a4, 0xf05137f221007f37, 0x892fa9e13a3b4948, 0x4d57b70d37548a32,
    0x1a7cfb3d566580e6, 0x7cb30272a45e3fac, 0x137ccffd9d51423f, 0xb87d96f3b82df266,
    0x33349aee7472ed37, 0x5cc0d3c99555bc07, 0x4a8f4fa196d964ef, 0xe82a0d64f281fbfa,
    0x38a1bac2c36823e1, 0x77d197c239fd737e, 0xfb07746b4e07df26, 0xc8a2198e967672bd,
    0x5f1a146d143fa05a, 0x26b877a1201ab7ac, 0x74e5b145214723f8, 0xe9ce10e3c70254bc,
    0x299393a0c05b79e8, 0xfd2d2b9822a5e7e2, 0x85424fea50c8e50a, 0xe6839e714b1fffe5,
    0x27971ccb46f9112a, 0xc98695a2e0715aa9, 0x338e1cbb4f858226, 0xfc6b5c5cf7a8d806,
    0x8973caadde8da50c, 0x9c6d47ae32ebae72, 0x1ebf1f9f21d26d78, 0x80a9704b8e153859,
    0x6afd20a939f141fb, 0xc35f6c2b3b553eef, 0x59529e8b0dc94c1a, 0x1569df036ebc4fa1,
    0xda32b88593c118f9, 0xf01e4155ff5a5660, 0x765a2522dce2b185, 0xcee95554128073ef,
    0x60f072a5ca51de2f,
];

pub(crate) const REFVAL_2ATONCE: [u64; 81] = [
    0, 0x772c7311be32ff42, 0x444753d23f207e03, 0x71f6df5da3b4f532,
    0x555859635365f660, 0xe98808f1cd39c626, 0x2eb18faf2163bb09, 0x7b9dd892c8019c87,
    0xe2b1431c4da4d15a, 0x1984e718a5477f70, 0x08dd17b266484f79, 0x4c83a05d766ad550,
    0x92dcebb131d1907d, 0xd67bc6fc881b8549, 0xf6a9886555fbf66b, 0x6e31616d7f33e25e,
    0x36e31b7426e3049d, 0x4f8e4faf46a13f5f, 0x03eb0cb3253f819f, 0x636a7769905770d2,
    0x3adf3781d16d1148, 0x92d19cb1818bc9c2, 0x283e68f4d459c533, 0xfa83a8a88decaa04,
    0x8c6f00368eac538c, 0x7b66b0cf3797b322, 0x5131e122fdaba3ff, 0x6e59ff515c08c7a9,
    0xba2c5269b2c377b0, 0xa9d24fd368fe8a2b, 0x22db13d32e33e891, 0x7b97dfc804b876e5,
    0xc598bdfcd0e834f9, 0xb256163d3687f5a7, 0x66d7a73c6aef50b3, 0x25a7201c85d9e2a3,
    0x911573eda15299aa, 0x5c0062b669e18e4c, 0x17734ade08d54e28, 0xfff036e33883f43b,
    0xfe0756e7777df11e, 0x37972472d023f129, 0x6cfce201b55c7f57, 0xe019d1d89f02b3e1,
    0xae5cc580fa1bb7e6, 0x295695fb7e59fc3a, 0x76b6c820a40dd35e, 0xb1680a1768462b17,
    0x2fb6af279137dada, 0x28fb6b4366c78535, 0xec278e53924541b1, 0x164f8aab8a2a28b5,
    0xb6c330aeac4578ad, 0x7f6f371070085084, 0x94dead60c0f448d3, 0x99737ac232c559ef,
    0x6f54a6f9ca8edd57, 0x979b01e926bfce0c, 0xf7d20bc85439c5b4, 0x64edb27cd8087c12,
    0x11488de5f79c0be2, 0x25541ddd1680b5a4, 0x8b633d33be9d1973, 0x404a3113acf7f6c6,
    0xc59dbdef8550cd56, 0x039d23c68f4f992c, 0x5bbb48e4bdd6fd86, 0x41e312248780df5a,
    0xd34791ce75d4e94f, 0xed523e5d04dcdcff, 0x7a6bce0b6182d879, 0x21fb37483cac28d8,
    0x19a1b66e8da878ad, 0x6f804c5295b09abe, 0x2a4be5014115ba81, 0xa678ecc5fc924be0,
    0x50f7a54a99a36f59, 0x0fd7e63a39a66452, 0x5ab1b213dd29c4e4, 0xf3ed80d9df6534c5,
    0xc736b12ef90615fd,
];

pub(crate) const REFVAL_2ATONCE128: [u64; 81] = [
    0x4ec7f6a48e33b00a, 0xb7b7faa5bd7d8c1e, 0x3269533f66534a76, 0x6c3ec6b687923bfc,
    0xc096f5e7efa471a9, 0x79d8afb550cea471, 0xcee0507a20fd5119, 0xfb04cffc14a9f4bf,
    0xbd4406e923807af2, 0x375c02ff11010491, 0xa6ea4c2a59e173ff, 0xe0a606f0002caddf,
    0xe13beae6ebc07897, 0xf069c2463e48ea10, 0x75bee1a97089b5fa, 0x378f22f8de0b8085,
    0x9c726fc4d53d0d8b, 0x71f6130a2d08f788, 0x7a9b20433ff6cf69, 0xff49b7cd59bf6d61,
    0xccaaee0d1ca9c6b3, 0xc77889d86039d2ad, 0x7b378b5bea9b0475, 0x6520bfa79d59ad66,
    0x2441490cb8a37267, 0xa715a66b7d5cf473, 0x9ae892c88334fd67, 0xd2ffe9aec1d2169a,
    0x790b993f18b18cbb, 0xa0d02fbcf6a7b1ad, 0xa90833e6f151d0c1, 0x1ac7afa37bd79be0,
    0xd5383628b2881a24, 0xe5526f9d63f9f8f1, 0xc1f165a01a6d1f4d, 0x6ccef8ff3fcfa3f2,
    0x2030f18325e6df48, 0x289207230e3fb17a, 0x077b66f713a3c4b9, 0x9f39843caf871754,
    0x512fda0f808accf3, 0xf4d9801cd0cd1f14, 0x28a0c749ed323638, 0x94844cafa671f01c,
    0xd0e261876b8aca51, 0x8fc2a648a4792ea2, 0x8ef87282136af5fe, 0x5fe6a54a9fba6b40,
    0xa3cc5b8fe6223d54, 0xa8c3c0dd651bb01c, 0x625e9fdd534716f3, 0x1ab2604083c33ac5,
    0xde098853f8692f12, 0x4b0813891bd87624, 0x4ab89c4553d182ad, 0x92c15aa2a3c27ada,
    0xff2918d68191f5d9, 0x06363174f641c325, 0x667112ada74a2059, 0x4bd605d6b5e53d7d,
    0xf2512c53663a14c8, 0x21857bcb1852667c, 0xafbebd0369aee228, 0x7049340e48fbfd6b,
    0x50710e1924f46954, 0x869a75e04a976a3f, 0x5a41abbdd6373889, 0xa781778389b4b188,
    0x21a3afced6c925b6, 0x107226192ec10b42, 0x62a862e84ec2f9b1, 0x2b15e91659606dd7,
    0x613934d1f9ec5a42, 0x4dc3a96dc5361baf, 0xc80bba4cb5f12903, 0x3e3edae99a7d6987,
    0x8f97b2d55941dcb0, 0x4c9787364c3e4ec1, 0xef0a2d07bea90ca7, 0x5fabf32c70aeeafb,
    0x3356a5cfa8f23bf4,
];

pub(crate) const REFVAL_2STREAM: [u64; 81] = [
    0x3c8426e33cb41606, 0xfd74be70ee73e617, 0xf43de3cdd8a20486, 0x882fbcb37e8ea3bb,
    0x1aa2cdd34caa3d4b, 0xee755b2bfae07ed5, 0xd4e225250d92e213, 0xa09b49083205965b,
    0xd47b21724ef9ec9e, 0xac888fc3858cee11, 0x94f820d85736f244, 0x1707951cca920932,
    0x8e0e45603f7877f0, 0x9fd2592c0e3a7212, 0x9a66370f3ae3d427, 0xd33382d2161de2b7,
    0x9a35be079da7115f, 0x73457c7ff58b4ec3, 0xbe8610bd53d7ce98, 0x65506dfe5ccd5371,
    0x286a321af9d5d9fa, 0xb81ef9a7ef3c536d, 0x2cfdb5e6825c6e86, 0xb2a58cbfdfdd303a,
    0xd26094a42b950635, 0xa34d666a5f02ad9a, 0x0151e013ebcc72e5, 0x9254a6ea7fcb6bb5,
    0x10c9361b3869dc2b, 0xd7ec55a060606276, 0xa2ff7f8bf8976ffd, 0xb5181bb6852dcc88,
    0x0ee394bb6178baff, 0x3a8b4b400d21b89c, 0xec270461970960fd, 0x615967fab053877e,
    0xfa51bf1cfeb4714c, 0x29fda8383070f375, 0xc3b663061bc52eda, 0x192bbaf1f1a57923,
    0x6d193b52f93c53af, 0x7f6f5639fe87ca1e, 0x69f7f9140b32edc8, 0xd0f2416fb24325b6,
    0x62c0e37fedd49ff3, 0x57866a4b809d373d, 0x9848d24bd935e137, 0xdfc905b66734d50a,
    0x9a938dd194a68529, 0x8276c44df0625228, 0xa4b35d00ad67c0ab, 0x3d9cb359842db452,
    0x4241bfa8c23b267f, 0x650fa517bef15952, 0x782de2abd8c7b1e1, 0x4eae456166ca3e15,
    0x40cdf3a02614e337, 0xad84092c46102172, 0x0c68479b03f9a167, 0x7e1ba046749e181c,
    0x3f3ab41a697382c1, 0xc5e5dd6586ebfdc4, 0xff926cd4eb02555c, 0x035cfe67f89e709b,
    0x89f06ab6464a1b9d, 0x8eff58f3f7dea758, 0x8b54ac657902089f, 0xc6c4f1f9f8da4d64,
    0xbdb729048aaac93a, 0xea76ba628f5e5cd6, 0x742159b728b8a979, 0x6d151cd3c720e53d,
    0xe97fff9368fcdc42, 0xca5b38314914fbda, 0xdd92c91d8b858eae, 0x66e5f07cf647cbf2,
    0xd4cf9b42f4985afb, 0x72ae17ac7d92f6b7, 0xb8206b22ab0472e1, 0x385876b5cfd42479,
    0x03294a249ebe6b26,
];

pub(crate) const REFVAL_2STREAM128: [u64; 81] = [
    0xcd2801d3b92237d6, 0x10e4d47bd821546d, 0x9100704b9d65cd06, 0xd6951cb4016313ef,
    0x24db636f96f474da, 0x3f4af7df3c49e422, 0xbff25b8af143459b, 0xa157ec13538be549,
    0xd3f5f52c47dbd419, 0x0ef3d7d735af1575, 0x46b7b892823f7b1b, 0xee22ea4655213289,
    0x56ad76f02fe929bc, 0x9cf6cd1ac886546e, 0xaf45ce47aea0b933, 0x535f9dc09f3996b7,
    0x1f0c3c01694ae128, 0x18495069be0766f7, 0x37e5ffb3d72a4cb1, 0x6d6c2e9299f30709,
    0x4f39e693f50b41e3, 0xb11fc4ef0658e116, 0x48bfaacb78e5079b, 0xe1b4c89c781b3ad0,
    0x81d2f34888d333a1, 0xf6d02270d2ea449c, 0xc884c3c2c3ce1503, 0x711ae16ba157a9b9,
    0x1e6140c642558c9d, 0x35ab3d238f5dc55b, 0x33f07b6aef051177, 0xe57336776eefa71c,
    0x6d445f8318ba3752, 0xd4f5f6631934c988, 0xd5e260085727c4a2, 0x5b54b41ec180b4fa,
    0x7f5d75769c15a898, 0xae5a6db850ca33c6, 0x038ccb8044663403, 0xda16310133dc92b8,
    0x6a2ffb7ab2b7ce2b, 0xdc1832d9229bae20, 0x8c62c479f5abc9e4, 0x5eb7b617857c9ccb,
    0xb79cf7d749a1e80d, 0xde7fac3798324fd3, 0x8178911813685d06, 0x6a726cbd394d4410,
    0x6cbe6b3280da1113, 0x6829ba4410cf1148, 0xfa7e417eb26c5bc6, 0x22ed87884d6e3a49,
    0x15f1472d5115669d, 0x2ea0b4c8bf69d318, 0xdfe87070aa545503, 0x6b4c14b5f7144ab9,
    0xc1ed49c06126551a, 0x351919fc425c3899, 0x7b569c0fa6f1bd3e, 0x713ac2350844cffd,
    0xe9367f9a638c2ff3, 0x97f17d325aea0786, 0xbcb907cc6cf75f91, 0x0cb7517daf247719,
    0xbe16093cc45be8a9, 0x786eee97359ad6ab, 0xb7afa4f326b97e78, 0x2694b67fe23e502e,
    0x4cb492826e98e0b4, 0x838d119f74a416c7, 0x70d6a91e4e5677fd, 0xf3e4027ad30000e6,
    0x9bdf692795807f77, 0x6a371f966e034a54, 0x8789cf41ae4d67ef, 0x02688755484d60ae,
    0xd5834b3a4bf5ce42, 0x9405fc61440de25d, 0x35eb280a157979b6, 0x48d40d6a525297ac,
    0x6a87dc185054bada,
];
