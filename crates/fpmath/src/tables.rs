#![forbid(unsafe_code)]

//! Coefficient sets, reduction constants and lookup tables.
//!
//! Every constant in this crate lives here, grouped by function family and
//! width. The polynomial coefficients come from offline Remez minimization
//! (the Sun fdlibm and FreeBSD msun lineage); the evaluation code depends on
//! these exact bit patterns, so they are written as raw bits rather than
//! decimal literals that a reader would have to trust the compiler to round.
//! Binary128 constants are stored as `u128` bit patterns and converted at
//! the point of use.

/// Natural exponential, binary32.
pub(crate) mod expf {
    pub(crate) const LN2_HI: f32 = f32::from_bits(0x3f317200); // 6.9314575195e-1
    pub(crate) const LN2_LO: f32 = f32::from_bits(0x35bfbe8e); // 1.4286067653e-6
    pub(crate) const INV_LN2: f32 = f32::from_bits(0x3fb8aa3b); // 1.4426950216e+0
    // Domain [-0.34568, 0.34568]:
    // |x*(exp(x)+1)/(exp(x)-1) - p(x)| < 2**-27.74
    pub(crate) const P1: f32 = f32::from_bits(0x3e2aaa8f); // 0xaaaa8f.0p-26
    pub(crate) const P2: f32 = f32::from_bits(0xbb355215); // -0xb55215.0p-32
}

/// Natural exponential, binary64.
pub(crate) mod exp {
    pub(crate) const LN2_HI: f64 = f64::from_bits(0x3fe62e42fee00000); // 6.93147180369123816490e-1
    pub(crate) const LN2_LO: f64 = f64::from_bits(0x3dea39ef35793c76); // 1.90821492927058770002e-10
    pub(crate) const INV_LN2: f64 = f64::from_bits(0x3ff71547652b82fe); // 1.44269504088896338700e+0
    // |exp(x) - p(x)| < 2**-59 on the reduced interval.
    pub(crate) const P1: f64 = f64::from_bits(0x3fc555555555553e); // 1.66666666666666019037e-1
    pub(crate) const P2: f64 = f64::from_bits(0xbf66c16c16bebd93); // -2.77777777770155933842e-3
    pub(crate) const P3: f64 = f64::from_bits(0x3f11566aaf25de2c); // 6.61375632143793436117e-5
    pub(crate) const P4: f64 = f64::from_bits(0xbebbbd41c5d26bf1); // -1.65339022054652515390e-6
    pub(crate) const P5: f64 = f64::from_bits(0x3e66376972bea4d0); // 4.13813679705723846039e-8
    /// log(DBL_MAX), largest x with a finite exp(x).
    pub(crate) const O_THRESHOLD: f64 = f64::from_bits(0x40862e42fefa39ef); // 7.09782712893383973096e+2
    /// Below this, exp(x) is a sure zero even after gradual underflow.
    pub(crate) const UNDERFLOW_SURE_ZERO: f64 = f64::from_bits(0xc0874910d52d3051); // -7.45133219101941108420e+2
    /// Below this, exp(x) underflows (possibly to a subnormal).
    pub(crate) const U_THRESHOLD: f64 = f64::from_bits(0xc086232bdd7abcd2); // -7.08396418532264106224e+2
}

/// Natural exponential kernel, binary128 (FreeBSD ld128 k_expl).
pub(crate) mod expq {
    pub(crate) const INTERVALS: i32 = 128;
    pub(crate) const LOG2_INTERVALS: i32 = 7;

    /// INTERVALS/ln2, in double; the reduction quotient only needs a few
    /// good bits.
    pub(crate) const INV_L: f64 = f64::from_bits(0x40671547652b82fe); // 1.8466496523378731e+2
    /// ln2/INTERVALS = L1 + L2. L1 carries 24 trailing zero bits so that
    /// n*L1 stays exact for every n the reduction can produce.
    pub(crate) const L1: u128 = 0x3ff762e42fefa39ef35793c768000000; // 5.4152123481245727e-3
    pub(crate) const L2: f64 = f64::from_bits(0xb9e9ff0342542fc3); // -1.0253670638894731e-29

    // Domain [-0.002708, 0.002708]: |exp(x) - p(x)| < 2**-124.9.
    // A7..A10 contribute below 2**-60 and are evaluated in double.
    pub(crate) const A3: u128 = 0x3ffc55555555555555555555554b7525;
    pub(crate) const A4: u128 = 0x3ffa55555555555555555555551849bb;
    pub(crate) const A5: u128 = 0x3ff811111111111111111841cbecc116;
    pub(crate) const A6: u128 = 0x3ff56c16c16c16c16c16f5c1b4a5137e;
    pub(crate) const A7: f64 = f64::from_bits(0x3f2a01a01a019f91); // 1.9841269841269470e-4
    pub(crate) const A8: f64 = f64::from_bits(0x3efa01a01a019dc7); // 2.4801587301585286e-5
    pub(crate) const A9: f64 = f64::from_bits(0x3ec71de3ec75a967); // 2.7557324277411235e-6
    pub(crate) const A10: f64 = f64::from_bits(0x3e927e505ab56259); // 2.7557333722375069e-7

    /// log(2**16384 - 0.5) rounded toward zero.
    pub(crate) const O_THRESHOLD: u128 = 0x400c62e42fefa39ef35793c7673007e5; // 11356.523406294143949
    /// log(2**(-16381-64-1)) rounded toward zero.
    pub(crate) const U_THRESHOLD: u128 = 0xc00c654bb3b2c73ebb059fabb506ff33; // -11433.462743336297878

    /// 2^(i/128) as hi + lo for i in [0, 128). hi is rounded to 88 mantissa
    /// bits so products against the reduced remainder stay exact.
    pub(crate) const EXPQ_TBL: [(u128, u128); 128] = [
        (0x3fff0000000000000000000000000000, 0x00000000000000000000000000000000),
        (0x3fff0163da9fb33356d84a66ae000000, 0x3fa49b6e6fd2001f60261b05f120203c),
        (0x3fff02c9a3e778060ee6f7caca000000, 0x3fa53de8a6f7a4f5c28b2af172e26e84),
        (0x3fff04315e86e7f84bd738f9a2000000, 0x3fa2b48fcdda0817697f80b5ec8abd37),
        (0x3fff059b0d31585743ae7c548e000000, 0x3fa66d19482ffca7c692befbe975f094),
        (0x3fff0706b29ddf6ddc6dc403a8000000, 0x3fa7d87b27ed07cb8b092ac75e311753),
        (0x3fff0874518759bc808c35f25c000000, 0x3fa79427fa2b041b2d6829d8993a0d01),
        (0x3fff09e3ecac6f3834521e060c000000, 0x3fa56135add2e8b808f69cc39ff32dd6),
        (0x3fff0b5586cf9890f6298b92b6000000, 0x3fa71842a98364291408b3ceb0a2a2bb),
        (0x3fff0cc922b7247f7407b705b8000000, 0x3fa627b8bd1558ac9cdfc5de3a863fb3),
        (0x3fff0e3ec32d3d1a2020742e4e000000, 0x3fa78af6a552ac4b358b1129e9f966a4),
        (0x3fff0fb66affed31af232091dc000000, 0x3fa78a1426514e0b627bda694a400a27),
        (0x3fff11301d0125b50a4ebbf1ae000000, 0x3fa6b26319d58b988f562cddcae84e2f),
        (0x3fff12abdc06c31cbfb92bad32000000, 0x3fa535a38bdc9c2f7df3b7e53ac72e06),
        (0x3fff1429aaea92ddfb34101942000000, 0x3fa7b2586d01844b389bea7aedd221d4),
        (0x3fff15a98c8a58e512480d573c000000, 0x3fa7d5613bf92a2b618ee31b376c2689),
        (0x3fff172b83c7d517adcdf7c8c4000000, 0x3fa70eb14a792035509ff7d758693f24),
        (0x3fff18af9388c8de9bbbf70b9a000000, 0x3fa4e1282e4be008172f8908ca0e9420),
        (0x3fff1a35beb6fcb753cb698f68000000, 0x3fa72d1c835a6c30724d5cfae31b84e5),
        (0x3fff1bbe084045cd39ab1e72b4000000, 0x3fa509f8d7e6b2d5f91ce45546686d12),
        (0x3fff1d4873168b9aa7805b8028000000, 0x3fa6321e0f53168440dc8c2cd9e0a3ae),
        (0x3fff1ed5022fcd91cb8819ff60000000, 0x3fa7121d1e504d36c47474c9b7de6067),
        (0x3fff2063b88628cd63b8eeb028000000, 0x3fa750929d0fc487d21c2b84004264de),
        (0x3fff21f49917ddc962552fd292000000, 0x3fa6297b696c3d4c48ef9543b9d04774),
        (0x3fff2387a6e75623866c1fadb0000000, 0x3fa7c15cb593b0328566902df69e4de2),
        (0x3fff251ce4fb2a63f3582ab7de000000, 0x3fa63d2902353915fb9ef2d26978ca5a),
        (0x3fff26b4565e27cdd257a67328000000, 0x3fa3d3b249dce4e9186ddd5ff44e6b08),
        (0x3fff284dfe1f5638096cf15cf0000000, 0x3fa4e504b3fed517296be40837971316),
        (0x3fff29e9df51fdee12c25d15f4000000, 0x3fa7a24aa3bca890ac08d203fed80a07),
        (0x3fff2b87fd0dad98ffddea4652000000, 0x3fa78fcab88442fdc3cb6de4519165ed),
        (0x3fff2d285a6e4030b40091d536000000, 0x3fa6a0ea708b13839a367c80314d6269),
        (0x3fff2ecafa93e2f5611ca0f45c000000, 0x3fa7523833af611bdcda253c554cf278),
        (0x3fff306fe0a31b7152de8d5a46000000, 0x3fa482e42f6f65e139a1b14fa8178d79),
        (0x3fff32170fc4cd8313539cf1c2000000, 0x3fa7008f86dde3220ae17a005b6412be),
        (0x3fff33c08b26416ff4c9c8610c000000, 0x3fa796696bf95d1593039539d94d662b),
        (0x3fff356c55f929ff0c94623476000000, 0x3fa4b9d79c6b6c6b7ca8364dde49e5e0),
        (0x3fff371a7373aa9caa7145502e000000, 0x3fa74547987e3e12516bf9c699be432f),
        (0x3fff38cae6d05d86585a9cb0d8000000, 0x3fa7bed0c853bd30a02790931eb2e8f0),
        (0x3fff3a7db34e59ff6ea1bc9298000000, 0x3fa7e0a1d336163fe2f852ceeb134067),
        (0x3fff3c32dc313a8e484001f228000000, 0x3fa66b1e6eebc0d56cc6a6003f5d3f94),
        (0x3fff3dea64c12342235b41223e000000, 0x3fa33d773fba2cb82b8244267c54443f),
        (0x3fff3fa4504ac801ba0bf701aa000000, 0x3fa5060cbee307236f7fcb1264279b18),
        (0x3fff4160a21f72e29f84325b8e000000, 0x3fa73db61fb352f0540e6ba05634413e),
        (0x3fff431f5d950a896dc7044394000000, 0x3fa30ccec81e24b0caff7581ef4127f7),
        (0x3fff44e086061892d03136f408000000, 0x3fa7df019fbd4f3b48709b78591d5cb5),
        (0x3fff46a41ed1d005772512f458000000, 0x3fa7229d97df404ff21f39c1b594d3a8),
        (0x3fff486a2b5c13cd013c1a3b68000000, 0x3fa7062f03c3dd75ce8757f780e6ec99),
        (0x3fff4a32af0d7d3de672d8bcf4000000, 0x3fa5be56191876c761e2c74522f4f32e),
        (0x3fff4bfdad5362a271d4397afe000000, 0x3fa6885c41c06c7745c2b38af3f05c96),
        (0x3fff4dcb299fddd0d63b36ef1a000000, 0x3fa63c19890964b4aacda17abeb15a47),
        (0x3fff4f9b2769d2ca6ad33d8b68000000, 0x3fa7aa073ee55e028497a329a7333dba),
        (0x3fff516daa2cf6641c112f52c8000000, 0x3fa5360886439c608985df5d8234800e),
        (0x3fff5342b569d4f81df0a83c48000000, 0x3fa7d86a63f4e672a3e429805b049465),
        (0x3fff551a4ca5d920ec52ec6202000000, 0x3fa50d3299c991771b049359866a1d5d),
        (0x3fff56f4736b527da66ecb0046000000, 0x3fa764eb3c00f2f5ab3d801d7cc7272d),
        (0x3fff58d12d497c7fd252bc2b72000000, 0x3fa743bcf2ec936a970d9cc266f0072f),
        (0x3fff5ab07dd48542958c930150000000, 0x3fa791eb345d88d7c81280e069fbdb63),
        (0x3fff5c9268a5946b701c4b1b80000000, 0x3fa76986a203d84e6a4a92f179e71889),
        (0x3fff5e76f15ad21486e9be4c20000000, 0x3fa4ccbb35032a4502c14f429ded95a9),
        (0x3fff605e1b976dc08b076f592a000000, 0x3fa521b8ecd3ab46d1da77e19ee72273),
        (0x3fff6247eb03a5584b1f0fa06e000000, 0x3fa7d2da42bb1ceaf9f732275b8aef30),
        (0x3fff6434634ccc31fc76f8714c000000, 0x3fa53b6693904000c1c40e8633de9b82),
        (0x3fff66238825522249127d9e28000000, 0x3fa7b8f314a337f4dc0a3adf1787ff74),
        (0x3fff68155d44ca973081c57226000000, 0x3fa7b9f32706bfe4e627d809a85dcc66),
        (0x3fff6a09e667f3bcc908b2fb12000000, 0x3fa766ea957d3e3adec17512775099da),
        (0x3fff6c012750bdabeed76a9980000000, 0x3fa2e9e67fbd7161d9b06220deaf67a0),
        (0x3fff6dfb23c651a2ef220e2cbe000000, 0x3fa3bbaa834b3f11577ceefbe6c1c411),
        (0x3fff6ff7df9519483cf87e1b4e000000, 0x3fa73e213bff9b702d5aa477c12523ce),
        (0x3fff71f75e8ec5f73dd2370f2e000000, 0x3fa6e159ad968696ac5b3d14415bb4c9),
        (0x3fff73f9a48a58173bd5c9a4e6000000, 0x3fa615623055c42fe74ed02eb2aa7d08),
        (0x3fff75feb564267c8bf6e9aa32000000, 0x3fa7a48b27071805e61a17b954a2dad8),
        (0x3fff780694fde5d3f619ae0280000000, 0x3fa60b1657657b9f0d9a11c6bf60981e),
        (0x3fff7a11473eb0186d7d51023e000000, 0x3fa76cda1f5ef42b66977960531e821b),
        (0x3fff7c1ed0130c1327c4933444000000, 0x3fa7937562b2dc933d44fc828efd4c9c),
        (0x3fff7e2f336cf4e62105d02ba0000000, 0x3fa75797e170a1427f8fcdf5f3906108),
        (0x3fff80427543e1a11b60de6764000000, 0x3fa6346a9d4e0d71c9b16e314ce57ef9),
        (0x3fff82589994cce128acf88afa000000, 0x3fa66694021ed5acb977581ea65a737c),
        (0x3fff8471a4623c7acce52f6b96000000, 0x3fa7c64095370f51f48817914dd78665),
        (0x3fff868d99b4492ec80e41d90a000000, 0x3fa684a2e0e909ae7e26df6aef2cad6e),
        (0x3fff88ac7d98a669966530bcde000000, 0x3fa72d4e9d61283ef385de170ab20f96),
        (0x3fff8ace5422aa0db5ba7c55a0000000, 0x3fa792c9bb3e6ed61f2733304a346d8f),
        (0x3fff8cf3216b5448bef2aa1cd0000000, 0x3fa761c55d84a9848f8c453b3ca8c946),
        (0x3fff8f1ae991577362b982745c000000, 0x3fa5cbb6013bf26d2b85162ba5182675),
        (0x3fff9145b0b91ffc588a61b468000000, 0x3fa7f6b70e01c2a90229a4c4309ea719),
        (0x3fff93737b0cdc5e4f4501c3f2000000, 0x3fa550288b4bf12bd606d8fa0c9bbfa7),
        (0x3fff95a44cbc8520ee9b483694000000, 0x3fa7a0fc6f7c7d61b2b3a22a0eab2cad),
        (0x3fff97d829fde4e4f8b9e920f8000000, 0x3fa71e8bd7edb9d7144b6f6818084cc7),
        (0x3fff9a0f170ca07b9ba3109b8c000000, 0x3fa519cdefac6787ab69a0974f155d0a),
        (0x3fff9c49182a3f0901c7c46b06000000, 0x3fa71f2be58ddade50c217186c90b457),
        (0x3fff9e86319e323231824ca78e000000, 0x3fa5931b8043e4b020aeeb7ebd8173f5),
        (0x3fffa0c667b5de564b29ada8b8000000, 0x3fa695669354084551b4fa8a25db58a9),
        (0x3fffa309bec4a2d3358c171f76000000, 0x3fa70daad547fa22c26d168ea762d854),
        (0x3fffa5503b23e255c8b424491c000000, 0x3fa65f0f7900a1480a702e07def95fea),
        (0x3fffa799e1330b3586f2dfb2b0000000, 0x3fa758f1a98796ce8908ae852236ca94),
        (0x3fffa9e6b5579fdbf43eb243bc000000, 0x3fa7ff4c4c58b571cf465caf07b4b9f5),
        (0x3fffac36bbfd3f379c0db966a2000000, 0x3fa71265fc73e480712d20f8597a8e7b),
        (0x3fffae89f995ad3ad5e8734d16000000, 0x3fa773205a7fbc3ae675ea440b162d6c),
        (0x3fffb0e07298db66590842acde000000, 0x3fa7c6f6ca0e5dcae2aafffa7a0554cb),
        (0x3fffb33a2b84f15faf6bfd0e7a000000, 0x3fa7d947c2575781dbb49b1237c87b6e),
        (0x3fffb59728de559398e3881110000000, 0x3fa764873c7171fefc410416be0a6525),
        (0x3fffb7f76f2fb5e46eaa7b081a000000, 0x3fa66a78a6a99120786adc96c4b55985),
        (0x3fffba5b030a10649840cb3c6a000000, 0x3fa6eb68fe52e406eafc398dd5b9175a),
        (0x3fffbcc1e904bc1d2247ba0f44000000, 0x3fa7b3d08cd0b20287092bd59be4ad98),
        (0x3fffbf2c25bd71e088408d7024000000, 0x3fa718e3449fa073b356766dfb568ff4),
        (0x3fffc199bdd85529c2220cb12a000000, 0x3fa22374ccf28892c946ccc24800872e),
        (0x3fffc40ab5fffd07a6d14df820000000, 0x3fa6e30514a6cdfa70f4f7baa99bee60),
        (0x3fffc67f12e57d14b4a2137fd2000000, 0x3fa2e56603bb3cd62a34da3f3ababea4),
        (0x3fffc8f6d9406e7b511acbc488000000, 0x3fa17110b76d560805c7cc6767941daa),
        (0x3fffcb720dcef90691503cbd1e000000, 0x3fa6293b6ec3b2ab358196dba7dab33c),
        (0x3fffcdf0b555dc3f9c44f8958e000000, 0x3fa7ac51be515f8c58bdfb6f5740a3a4),
        (0x3fffd072d4a07897b8d0f22f20000000, 0x3fa7a158e18fbbfc625f09f4cca40874),
        (0x3fffd2f87080d89f18ade12398000000, 0x3fa63d4404b698acaa7eb9bdc99248e5),
        (0x3fffd5818dcfba48725da05aea000000, 0x3fa766e0dca9f589f559c0876ff23830),
        (0x3fffd80e316c98397bb84f9d04000000, 0x3fa6100bf097d8c29bc4d3201bbf31a5),
        (0x3fffda9e603db3285708c01a5a000000, 0x3fa76d4c97f6246f0ec614ec95c99392),
        (0x3fffdd321f301b4604b695de3c000000, 0x3fa18c28e4c854a678c353edcd40f0d2),
        (0x3fffdfc97337b9b5eb968cac38000000, 0x3fa7ed291b7225a944efd5bb5524b927),
        (0x3fffe264614f5a128a12761fa0000000, 0x3fa77ada6467e77f73bf65e04c95e29d),
        (0x3fffe502ee78b3ff6273d13014000000, 0x3fa73991e8f49659e1693be17ae1d2f9),
        (0x3fffe7a51fbc74c834b548b282000000, 0x3fa723786758a84f4956354634a416ce),
        (0x3fffea4afa2a490d9858f73a18000000, 0x3fa6ebb6603f0dbd440c219ddc27d6f7),
        (0x3fffecf482d8e67f08db0312fa000000, 0x3fa7949cef462010bb4bc4ce72a900df),
        (0x3fffefa1bee615a27771fd21a8000000, 0x3fa72dac1f6dd5d229ff68e46f27e3df),
        (0x3ffff252b376bba974e8696fc2000000, 0x3fa76390d4c6ad5476b5162f40e1d9a9),
        (0x3ffff50765b6e4540674f84b76000000, 0x3fa44315d7fcc8006fe21a95d14dc484),
        (0x3ffff7bfdad9cbe138913b4bfe000000, 0x3fa5caf6571739ca03e9348d128fd586),
        (0x3ffffa7c1819e90d82e90a7e74000000, 0x3fa664c783b80c186deeca16981e4675),
        (0x3ffffd3c22b8f71f10975ba4b2000000, 0x3fa72bcf3a5e12d269d8ad7c1a4a8875),
    ];
}

/// Base-2 exponential, binary32 (FreeBSD s_exp2f).
pub(crate) mod exp2f {
    pub(crate) const TBL_SIZE: u32 = 16;

    /// 0x1.8p23 / TBL_SIZE; adding it parks the rounded integer part and
    /// the table index in the low mantissa bits.
    pub(crate) const REDUX: f32 = f32::from_bits(0x49400000); // 0x1.8p19

    // Degree-4 minimax for 2^z on |z| <= 2**-5, |err| < 1.4*2**-33.
    // Stored at binary32 precision, evaluated in double like the rest of
    // the kernel.
    pub(crate) const P1: f32 = f32::from_bits(0x3f317218); // 0x1.62e430p-1
    pub(crate) const P2: f32 = f32::from_bits(0x3e75fdf0); // 0x1.ebfbe0p-3
    pub(crate) const P3: f32 = f32::from_bits(0x3d6359a4); // 0x1.c6b348p-5
    pub(crate) const P4: f32 = f32::from_bits(0x3c1d964e); // 0x1.3b2c9cp-7

    /// 2^(i/16) for i in [-8, 8), biased by 8, at double precision.
    pub(crate) const EXP2FT: [u64; 16] = [
        0x3fe6a09e667f3bcd,
        0x3fe7a11473eb0187,
        0x3fe8ace5422aa0db,
        0x3fe9c49182a3f090,
        0x3feae89f995ad3ad,
        0x3fec199bdd85529c,
        0x3fed5818dcfba487,
        0x3feea4afa2a490da,
        0x3ff0000000000000,
        0x3ff0b5586cf9890f,
        0x3ff172b83c7d517b,
        0x3ff2387a6e756238,
        0x3ff306fe0a31b715,
        0x3ff3dea64c123422,
        0x3ff4bfdad5362a27,
        0x3ff5ab07dd485429,
    ];
}

/// Base-2 exponential, binary64.
pub(crate) mod exp2 {
    // ln2 rounded once to binary128, for the base-2 kernel rescale.
    pub(crate) const LN2_Q: u128 = 0x3ffe62e42fefa39ef35793c7673007e6;

    /// 0x1.8p52; same rounding trick as the binary32 redux constant, with
    /// no table index to extract.
    pub(crate) const REDUX: f64 = f64::from_bits(0x4338000000000000);
}

/// expm1, binary32.
pub(crate) mod expm1f {
    pub(crate) const O_THRESHOLD: f32 = f32::from_bits(0x42b17180); // 8.8721679688e+1
    pub(crate) const LN2_HI: f32 = f32::from_bits(0x3f317180); // 6.9313812256e-1
    pub(crate) const LN2_LO: f32 = f32::from_bits(0x3717f7d1); // 9.0580006145e-6
    pub(crate) const INV_LN2: f32 = f32::from_bits(0x3fb8aa3b); // 1.4426950216e+0
    // Domain [-0.34568, 0.34568]:
    // |6/x * (1 + 2*(1/(exp(x)-1) - 1/x)) - q(x)| < 2**-30.04
    pub(crate) const Q1: f32 = f32::from_bits(0xbd088868); // -0x888868.0p-28
    pub(crate) const Q2: f32 = f32::from_bits(0x3acf3010); // 0xcf3010.0p-33
}

/// expm1, binary64.
pub(crate) mod expm1 {
    pub(crate) const O_THRESHOLD: f64 = f64::from_bits(0x40862e42fefa39ef); // 7.09782712893383973096e+2
    pub(crate) const LN2_HI: f64 = f64::from_bits(0x3fe62e42fee00000);
    pub(crate) const LN2_LO: f64 = f64::from_bits(0x3dea39ef35793c76);
    pub(crate) const INV_LN2: f64 = f64::from_bits(0x3ff71547652b82fe);
    // Scaled series coefficients: Qn here is 2**n times the Qn of the
    // unscaled rational approximation.
    pub(crate) const Q1: f64 = f64::from_bits(0xbfa11111111110f4); // -3.33333333333331316428e-2
    pub(crate) const Q2: f64 = f64::from_bits(0x3f5a01a019fe5585); // 1.58730158725481460165e-3
    pub(crate) const Q3: f64 = f64::from_bits(0xbf14ce199eaadbb7); // -7.93650757867487942473e-5
    pub(crate) const Q4: f64 = f64::from_bits(0x3ed0cfca86e65239); // 4.00821782732936239552e-6
    pub(crate) const Q5: f64 = f64::from_bits(0xbe8afdb76e09c32d); // -2.01099218183624371326e-7
}

/// Shared logarithm kernel, binary32.
///
/// |(log(1+s)-log(1-s))/s - Lg(s)| < 2**-34.24 on the reduced interval.
pub(crate) mod logf {
    pub(crate) const LG1: f32 = f32::from_bits(0x3f2aaaaa); // 0xaaaaaa.0p-24
    pub(crate) const LG2: f32 = f32::from_bits(0x3eccce13); // 0xccce13.0p-25
    pub(crate) const LG3: f32 = f32::from_bits(0x3e91e9ee); // 0x91e9ee.0p-25
    pub(crate) const LG4: f32 = f32::from_bits(0x3e789e26); // 0xf89e26.0p-26

    pub(crate) const LN2_HI: f32 = f32::from_bits(0x3f317180); // 6.9313812256e-1
    pub(crate) const LN2_LO: f32 = f32::from_bits(0x3717f7d1); // 9.0580006145e-6

    /// Mantissa-shift anchor: the bit pattern of sqrt(2)/2.
    pub(crate) const SQRT2_OVER2_BITS: u32 = 0x3f3504f3;
}

/// Shared logarithm kernel, binary64.
///
/// |(log(1+s)-log(1-s))/s - Lg(s)| < 2**-58.45 on the reduced interval.
pub(crate) mod log {
    pub(crate) const LG1: f64 = f64::from_bits(0x3fe5555555555593); // 6.666666666666735130e-1
    pub(crate) const LG2: f64 = f64::from_bits(0x3fd999999997fa04); // 3.999999999940941908e-1
    pub(crate) const LG3: f64 = f64::from_bits(0x3fd2492494229359); // 2.857142874366239149e-1
    pub(crate) const LG4: f64 = f64::from_bits(0x3fcc71c51d8e78af); // 2.222219843214978396e-1
    pub(crate) const LG5: f64 = f64::from_bits(0x3fc7466496cb03de); // 1.818357216161805012e-1
    pub(crate) const LG6: f64 = f64::from_bits(0x3fc39a09d078c69f); // 1.531383769920937332e-1
    pub(crate) const LG7: f64 = f64::from_bits(0x3fc2f112df3e5244); // 1.479819860511658591e-1

    pub(crate) const LN2_HI: f64 = f64::from_bits(0x3fe62e42fee00000); // 6.93147180369123816490e-1
    pub(crate) const LN2_LO: f64 = f64::from_bits(0x3dea39ef35793c76); // 1.90821492927058770002e-10

    /// High word of sqrt(2)/2, the reduction anchor.
    pub(crate) const SQRT2_OVER2_HI: u32 = 0x3fe6a09e;
}

/// log2 reconstruction constants.
pub(crate) mod log2 {
    pub(crate) const IVLN2_HI_F: f32 = f32::from_bits(0x3fb8b000); // 1.4428710938e+0
    pub(crate) const IVLN2_LO_F: f32 = f32::from_bits(0xb9389ad4); // -1.7605285393e-4

    pub(crate) const IVLN2_HI: f64 = f64::from_bits(0x3ff7154765200000); // 1.44269504072144627571e+0
    pub(crate) const IVLN2_LO: f64 = f64::from_bits(0x3de705fc2eefa200); // 1.67517131648865118353e-10
}

/// log10 reconstruction constants.
pub(crate) mod log10 {
    pub(crate) const IVLN10_HI_F: f32 = f32::from_bits(0x3ede6000); // 4.3432617188e-1
    pub(crate) const IVLN10_LO_F: f32 = f32::from_bits(0xb804ead9); // -3.1689971365e-5
    pub(crate) const LOG10_2_HI_F: f32 = f32::from_bits(0x3e9a2080); // 3.0102920532e-1
    pub(crate) const LOG10_2_LO_F: f32 = f32::from_bits(0x355427db); // 7.9034151668e-7

    pub(crate) const IVLN10_HI: f64 = f64::from_bits(0x3fdbcb7b15200000); // 4.34294481878168880939e-1
    pub(crate) const IVLN10_LO: f64 = f64::from_bits(0x3dbb9438ca9aadd5); // 2.50829467116452752298e-11
    pub(crate) const LOG10_2_HI: f64 = f64::from_bits(0x3fd34413509f6000); // 3.01029995663611771306e-1
    pub(crate) const LOG10_2_LO: f64 = f64::from_bits(0x3d59fef311f12b36); // 3.69423907715893078616e-13
}

/// Shared logarithm kernel and reconstruction constants, binary128.
///
/// Each `*_HI` has its low 64 mantissa bits zeroed so that products against
/// an integer scale (or a Dekker-truncated partial sum) stay exact.
pub(crate) mod logq {
    /// Series coefficients 2/(2n+3) for n in [0, 24), exactly rounded.
    /// 24 terms put the truncation error below 2**-121 for |s| <= 0.1716.
    pub(crate) const LGQ: [u128; 24] = [
        0x3ffe5555555555555555555555555555, // 2/3
        0x3ffd999999999999999999999999999a, // 2/5
        0x3ffd2492492492492492492492492492, // 2/7
        0x3ffcc71c71c71c71c71c71c71c71c71c, // 2/9
        0x3ffc745d1745d1745d1745d1745d1746, // 2/11
        0x3ffc3b13b13b13b13b13b13b13b13b14, // 2/13
        0x3ffc1111111111111111111111111111, // 2/15
        0x3ffbe1e1e1e1e1e1e1e1e1e1e1e1e1e2, // 2/17
        0x3ffbaf286bca1af286bca1af286bca1b, // 2/19
        0x3ffb8618618618618618618618618618, // 2/21
        0x3ffb642c8590b21642c8590b21642c86, // 2/23
        0x3ffb47ae147ae147ae147ae147ae147b, // 2/25
        0x3ffb2f684bda12f684bda12f684bda13, // 2/27
        0x3ffb1a7b9611a7b9611a7b9611a7b961, // 2/29
        0x3ffb0842108421084210842108421084, // 2/31
        0x3ffaf07c1f07c1f07c1f07c1f07c1f08, // 2/33
        0x3ffad41d41d41d41d41d41d41d41d41d, // 2/35
        0x3ffabacf914c1bacf914c1bacf914c1c, // 2/37
        0x3ffaa41a41a41a41a41a41a41a41a41a, // 2/39
        0x3ffa8f9c18f9c18f9c18f9c18f9c18fa, // 2/41
        0x3ffa7d05f417d05f417d05f417d05f41, // 2/43
        0x3ffa6c16c16c16c16c16c16c16c16c17, // 2/45
        0x3ffa5c9882b9310572620ae4c415c988, // 2/47
        0x3ffa4e5e0a72f05397829cbc14e5e0a7, // 2/49
    ];

    pub(crate) const LN2_HI: u128 = 0x3ffe62e42fefa39e0000000000000000;
    pub(crate) const LN2_LO: u128 = 0x3fcde6af278ece600fcbdabd03cd0c9a;

    pub(crate) const IVLN2_HI: u128 = 0x3fff71547652b82f0000000000000000;
    pub(crate) const IVLN2_LO: u128 = 0x3fcec2eefa1ffb41a474fa23ad5deaa3;

    pub(crate) const IVLN10_HI: u128 = 0x3ffdbcb7b1526e500000000000000000;
    pub(crate) const IVLN10_LO: u128 = 0x3fccc654d56eaabeb4cf70c8fb8d1809;

    pub(crate) const LOG10_2_HI: u128 = 0x3ffd34413509f79f0000000000000000;
    pub(crate) const LOG10_2_LO: u128 = 0x3fccde623e2566b02df245e09ab4c315;

    /// sqrt(2)/2, the reduction anchor.
    pub(crate) const SQRT2_OVER2_BITS: u128 = 0x3ffe6a09e667f3bcc908b2fb1366ea95;
    /// sqrt(2) - 1, upper edge of the no-rescale window for log1p.
    pub(crate) const SQRT2_M1_BITS: u128 = 0x3ffda827999fcef32422cbec4d9baa56;
    /// sqrt(2)/2 - 1, lower edge of the no-rescale window for log1p.
    pub(crate) const SQRT2H_M1_BITS: u128 = 0xbffd2bec333018866dee9a09d9322ad5;
}
