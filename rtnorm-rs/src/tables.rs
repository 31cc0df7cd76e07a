//! Stripe table for Chopin's truncated-normal sampler.
//!
//! Generated by `cargo run -p rtnorm-rs --example gentables > rtnorm-rs/src/tables.rs`.
//! Do not edit by hand.
//!
//! Every stripe has area `A = φ(0) / INVH`. Boundaries grow outward from the
//! mode at `X[MODE_CELL] = 0`: leftward with `x_k = x_{k+1} - A / φ(x_{k+1})`,
//! rightward with `x_{k+1} = x_k + A / φ(x_k)`.

/// Inverse of the narrowest stripe width (the stripes touching the mode).
pub const INVH: f64 = 1631.73284006;
/// Quantization offset, `-floor(X[0] * INVH)`.
pub const I0: usize = 3271;
/// Number of stripes. As a cell index it names the tail beyond `X[N]`.
pub const N: usize = 4001;
/// First stripe to the right of the mode.
pub const MODE_CELL: usize = 1954;
/// Leftmost stripe boundary, `X[0]`.
pub const XMIN: f64 = -2.0044320403418676;
/// Rightmost stripe boundary, `X[N]`.
pub const XMAX: f64 = 3.48672170312977;
/// Lower density envelope of the leftmost stripe, `φ(X[0])`.
pub const YL_FIRST: f64 = 0.05351397547404752;
/// Lower density envelope of the rightmost stripe, `φ(X[N])`.
pub const YL_LAST: f64 = 0.0009141163923016696;

/// Stripe boundaries, strictly increasing.
pub static X: [f64; 4002] = [
    -2.0044320403418676, -1.999904555452435, -1.995417472106523, -1.990969989598571,
    -1.9865613312264505, -1.9821907433337507, -1.9778574943995604, -1.9735608741729396,
    -1.9693001928494662, -1.965074780287422, -1.9608839852613424, -1.9567271747508097,
    -1.952603733262504, -1.94851306218366, -1.9444545791651948, -1.9404277175328821,
    -1.9364319257250546, -1.9324666667554071, -1.9285314176995658, -1.9246256692041694,
    -1.9207489250172836, -1.9169007015390442, -1.9130805273914897, -1.9092879430066036,
    -1.9055225002316492, -1.9017837619509286, -1.8980713017231519, -1.8943847034336456,
    -1.8907235609606787, -1.8870874778552187, -1.8834760670334745, -1.8798889504816167,
    -1.8763257589720983, -1.872786131791032, -1.869269716476111, -1.8657761685645835,
    -1.8623051513508229, -1.858856335653056, -1.855429399588837, -1.8520240283588727,
    -1.8486399140388332, -1.8452767553787903, -1.8419342576099524, -1.838612132258379,
    -1.8353100969653717, -1.832027875314258, -1.8287651966632945, -1.825521795984431,
    -1.822297413707691, -1.8190917955709347, -1.8159046924747795, -1.81273586034247,
    -1.8095850599844927, -1.8064520569677456, -1.8033366214890767, -1.8002385282530204,
    -1.7971575563535627, -1.794093489159776, -1.7910461142051755, -1.7880152230806483,
    -1.7850006113308192, -1.7820020783537218, -1.7790194273036475, -1.7760524649970526,
    -1.7731010018214086, -1.7701648516468846, -1.7672438317407584, -1.7643377626844527,
    -1.7614464682931033, -1.7585697755375636, -1.7557075144687593, -1.7528595181443087,
    -1.7500256225573254, -1.747205666567327, -1.7443994918331764, -1.7416069427479814,
    -1.7388278663758867, -1.7360621123906912, -1.7333095330162274, -1.730569982968443,
    -1.727843319399127, -1.7251294018412209, -1.7224280921556683, -1.7197392544797432,
    -1.7170627551768145, -1.7143984627874944, -1.7117462479821268, -1.7091059835145723,
    -1.7064775441772462, -1.703860806757369, -1.7012556499943918, -1.6986619545385557,
    -1.6960796029105523, -1.6935084794622481, -1.6909484703384414, -1.6883994634396151,
    -1.6858613483856595, -1.683334016480531, -1.6808173606778194, -1.6783112755471958,
    -1.6758156572417133, -1.6733304034659353, -1.6708554134448663, -1.668390587893661,
    -1.6659358289880866, -1.66349104033572, -1.6610561269478523, -1.6586309952120861,
    -1.6562155528655984, -1.6538097089690567, -1.6514133738811625, -1.6490264592338104,
    -1.6466488779078392, -1.644280544009362, -1.641921372846658, -1.6395712809076082,
    -1.637230185837662, -1.634898006418319, -1.6325746625461088, -1.6302600752120617,
    -1.6279541664816484, -1.6256568594751817, -1.623368078348665, -1.6210877482750767,
    -1.6188157954260765, -1.6165521469541242, -1.6142967309749998, -1.6120494765507118,
    -1.6098103136727873, -1.6075791732459288, -1.6053559870720333, -1.6031406878345593,
    -1.6009332090832362, -1.5987334852191046, -1.596541451479881, -1.5943570439256363,
    -1.592180199424782, -1.5900108556403552, -1.587848951016595, -1.5856944247658022,
    -1.5835472168554765, -1.5814072679957225, -1.5792745196269196, -1.5771489139076476,
    -1.5750303937028625, -1.5729189025723158, -1.5708143847592118, -1.5687167851790962,
    -1.5666260494089723, -1.564542123676636, -1.5624649548502267, -1.5603944904279898,
    -1.5583306785282418, -1.5562734678795371, -1.5542228078110296, -1.5521786482430249,
    -1.5501409396777186, -1.5481096331901167, -1.546084680419133, -1.5440660335588599,
    -1.5420536453500087, -1.540047469071515, -1.538047458532305, -1.5360535680632212,
    -1.5340657525091004, -1.5320839672210027, -1.5301081680485893, -1.5281383113326412,
    -1.5261743538977213, -1.5242162530449719, -1.522263966545048, -1.52031745263118,
    -1.5183766699923675, -1.5164415777666955, -1.5145121355347757, -1.512588303313307,
    -1.510670041548753, -1.5087573111111354, -1.5068500732879382, -1.5049482897781234,
    -1.5030519226862533, -1.501160934516718, -1.4992752881680662, -1.4973949469274364,
    -1.4955198744650864, -1.493650034829021, -1.491785392439711, -1.4899259120849082,
    -1.4880715589145481, -1.486222298435743, -1.4843780965078606, -1.4825389193376886,
    -1.4807047334746817, -1.4788755058062908, -1.4770512035533712, -1.4752317942656699,
    -1.4734172458173882, -1.4716075264028208, -1.4698026045320676, -1.4680024490268169,
    -1.4662070290162004, -1.4644163139327167, -1.4626302735082224, -1.4608488777699897,
    -1.4590720970368296, -1.457299901915278, -1.4555322632958447, -1.4537691523493244,
    -1.4520105405231662, -1.4502563995379043, -1.4485067013836437, -1.4467614183166049,
    -1.445020522855723, -1.4432839877793011, -1.4415517861217189, -1.4398238911701904,
    -1.4381002764615767, -1.4363809157792464, -1.434665783149987, -1.4329548528409644,
    -1.4312480993567296, -1.4295454974362731, -1.4278470220501243, -1.4261526483974958,
    -1.424462351903473, -1.4227761082162451, -1.421093893204381, -1.419415682954145,
    -1.4177414537668542, -1.416071182156276, -1.4144048448460653, -1.4127424187672408,
    -1.4110838810556985, -1.4094292090497627, -1.4077783802877744, -1.4061313725057154,
    -1.4044881636348676, -1.402848731799507, -1.4012130553146325, -1.3995811126837268,
    -1.3979528825965524, -1.396328343926978, -1.3947074757308378, -1.393090257243821,
    -1.3914766678793937, -1.3898666872267487, -1.388260295048787, -1.3866574712801272,
    -1.3850581960251438, -1.3834624495560337, -1.38187021231091, -1.380281464891923,
    -1.3786961880634094, -1.3771143627500644, -1.375535970035143, -1.373960991158685,
    -1.3723894075157643, -1.3708212006547649, -1.3692563522756784, -1.3676948442284274,
    -1.36613665851121, -1.36458177726887, -1.363030182791286, -1.3614818575117869,
    -1.3599367840055847, -1.3583949449882324, -1.3568563233141013, -1.3553209019748786,
    -1.3537886640980865, -1.352259592945621, -1.3507336719123093, -1.3492108845244892,
    -1.3476912144386044, -1.346174645439821, -1.3446611614406612, -1.343150746479656,
    -1.3416433847200149, -1.3401390604483143, -1.3386377580732023, -1.3371394621241206,
    -1.335644157250044, -1.3341518282182352, -1.3326624599130172, -1.3311760373345611,
    -1.329692545597689, -1.3282119699306927, -1.3267342956741692, -1.3252595082798688,
    -1.32378759330956, -1.3223185364339076, -1.3208523234313658, -1.3193889401870853,
    -1.3179283726918343, -1.316470607040933, -1.3150156294332027, -1.3135634261699258,
    -1.3121139836538216, -1.3106672883880326, -1.3092233269751254, -1.3077820861161034,
    -1.3063435526094305, -1.3049077133500697, -1.3034745553285307, -1.3020440656299315,
    -1.30061623143307, -1.2991910400095086, -1.297768478722668, -1.2963485350269341,
    -1.294931196466775, -1.2935164506758674, -1.292104285376237, -1.2906946883774058,
    -1.2892876475755513, -1.287883150952676, -1.2864811865757866, -1.2850817425960825,
    -1.2836848072481555, -1.2822903688491971, -1.2808984157982168, -1.2795089365752692,
    -1.27812191974069, -1.276737353934341, -1.2753552278748648, -1.2739755303589475,
    -1.2725982502605901, -1.2712233765303889, -1.2698508981948233, -1.2684808043555538,
    -1.2671130841887261, -1.2657477269442845, -1.2643847219452928, -1.2630240585872632,
    -1.2616657263374926, -1.2603097147344073, -1.2589560133869147, -1.2576046119737616,
    -1.256255500242902, -1.2549086680108692, -1.2535641051621584, -1.2522218016486129,
    -1.2508817474888192, -1.2495439327675093, -1.2482083476349684, -1.2468749823064496,
    -1.2455438270615957, -1.2442148722438673, -1.2428881082599768, -1.2415635255793291,
    -1.2402411147334689, -1.2389208663155324, -1.2376027709797077, -1.236286819440699,
    -1.2349730024731977, -1.233661310911359, -1.232351735648284, -1.2310442676355084,
    -1.2297388978824955, -1.2284356174561355, -1.22713441748025, -1.2258352891351025,
    -1.224538223656913, -1.223243212337378, -1.2219502465231975, -1.2206593176156049,
    -1.2193704170699022, -1.218083536395002, -1.2167986671529716, -1.2155158009585845,
    -1.2142349294788755, -1.2129560444326999, -1.2116791375902987, -1.2104042007728677,
    -1.2091312258521307, -1.2078602047499187, -1.2065911294377512, -1.2053239919364236,
    -1.2040587843155992, -1.202795498693404, -1.201534127236026, -1.2002746621573204,
    -1.1990170957184163, -1.1977614202273292, -1.1965076280385771, -1.1952557115528002,
    -1.1940056632163851, -1.1927574755210923, -1.1915111410036878, -1.190266652245578,
    -1.1890240018724494, -1.1877831825539105, -1.1865441870031384, -1.1853070079765287,
    -1.1840716382733487, -1.1828380707353945, -1.181606298246651, -1.1803763137329562,
    -1.1791481101616672, -1.1779216805413317, -1.1766970179213614, -1.1754741153917083,
    -1.1742529660825456, -1.1730335631639508, -1.1718158998455919, -1.170599969376417,
    -1.1693857650443475, -1.1681732801759728, -1.1669625081362491, -1.1657534423282019,
    -1.164546076192629, -1.1633404032078085, -1.1621364168892094, -1.1609341107892042,
    -1.1597334784967843, -1.1585345136372793, -1.1573372098720778, -1.156141560898351,
    -1.15494756044878, -1.1537552022912845, -1.152564480228755, -1.1513753880987865,
    -1.1501879197734162, -1.1490020691588623, -1.147817830195266, -1.1466351968564357,
    -1.1454541631495943, -1.1442747231151276, -1.1430968708263365, -1.14192060038919,
    -1.1407459059420821, -1.1395727816555898, -1.138401221732234, -1.1372312204062418,
    -1.1360627719433132, -1.1348958706403862, -1.1337305108254083, -1.1325666868571067,
    -1.1314043931247628, -1.1302436240479876, -1.1290843740764998, -1.1279266376899058,
    -1.126770409397481, -1.125615683737955, -1.124462455279296, -1.1233107186184994,
    -1.122160468381378, -1.1210116992223529, -1.1198644058242477, -1.1187185828980837,
    -1.1175742251828769, -1.1164313274454376, -1.1152898844801715, -1.114149891108882,
    -1.1130113421805747, -1.111874232571264, -1.110738557183781, -1.1096043109475826,
    -1.108471488818564, -1.107340085778871, -1.1062100968367148, -1.1050815170261885,
    -1.1039543414070854, -1.102828565064718, -1.1017041831097398, -1.1005811906779674,
    -1.0994595829302054, -1.0983393550520721, -1.0972205022538268, -1.0961030197701989,
    -1.094986902860218, -1.0938721468070456, -1.0927587469178093, -1.0916466985234365,
    -1.0905359969784916, -1.0894266376610124, -1.0883186159723506, -1.0872119273370107,
    -1.0861065672024928, -1.0850025310391354, -1.0838998143399596, -1.0827984126205157,
    -1.0816983214187295, -1.0805995362947507, -1.0795020528308035, -1.0784058666310365,
    -1.077310973321376, -1.0762173685493783, -1.0751250479840855, -1.0740340073158805,
    -1.0729442422563453, -1.0718557485381186, -1.0707685219147554, -1.0696825581605875,
    -1.0685978530705864, -1.0675144024602254, -1.066432202165344, -1.0653512480420133,
    -1.0642715359664023, -1.0631930618346461, -1.0621158215627133, -1.061039811086277,
    -1.0599650263605847, -1.0588914633603304, -1.057819118079528, -1.0567479865313845,
    -1.0556780647481754, -1.0546093487811206, -1.0535418347002614, -1.052475518594339,
    -1.0514103965706727, -1.0503464647550402, -1.049283719291559, -1.0482221563425678,
    -1.0471617720885094, -1.046102562727815, -1.045044524476789, -1.0439876535694934,
    -1.042931946257636, -1.0418773988104573, -1.0408240075146187, -1.0397717686740922,
    -1.0387206786100502, -1.0376707336607573, -1.036621930181461, -1.0355742645442856,
    -1.034527733138125, -1.0334823323685385, -1.0324380586576443, -1.031394908444017,
    -1.0303528781825841, -1.0293119643445237, -1.028272163417163, -1.0272334719038783,
    -1.026195886323994, -1.0251594032126845, -1.0241240191208758, -1.0230897306151474,
    -1.022056534277636, -1.0210244267059394, -1.019993404513021, -1.0189634643271155,
    -1.017934602791635, -1.0169068165650756, -1.0158801023209258, -1.0148544567475741,
    -1.0138298765482183, -1.0128063584407752, -1.011783899157791, -1.0107624954463525,
    -1.0097421440679988, -1.0087228417986338, -1.0077045854284392, -1.0066873717617886,
    -1.0056711976171615, -1.0046560598270589, -1.003641955237918, -1.0026288807100303,
    -1.0016168331174566, -1.0006058093479462, -0.9995958063028542, -0.9985868208970605,
    -0.9975788500588897, -0.9965718907300306, -0.9955659398654573, -0.99456099443335,
    -0.993557051415017, -0.9925541078048175, -0.9915521606100838, -0.9905512068510454,
    -0.9895512435607531, -0.9885522677850034, -0.9875542765822639, -0.9865572670235992,
    -0.985561236192597, -0.9845661811852948, -0.983572099110108, -0.9825789870877571,
    -0.9815868422511965, -0.9805956617455434, -0.9796054427280072, -0.9786161823678198,
    -0.9776278778461658, -0.9766405263561138, -0.9756541251025476, -0.9746686713020984,
    -0.9736841621830775, -0.9727005949854088, -0.9717179669605628, -0.97073627537149,
    -0.9697555174925558, -0.9687756906094754, -0.9677967920192487, -0.9668188190300965,
    -0.9658417689613966, -0.9648656391436208, -0.9638904269182715, -0.9629161296378203,
    -0.9619427446656449, -0.9609702693759686, -0.9599987011537987, -0.9590280373948659,
    -0.9580582755055643, -0.9570894129028917, -0.9561214470143898, -0.9551543752780857,
    -0.954188195142433, -0.9532229040662543, -0.9522584995186828, -0.9512949789791053,
    -0.9503323399371053, -0.9493705798924065, -0.9484096963548164, -0.9474496868441712,
    -0.9464905488902797, -0.945532280032869, -0.9445748778215294, -0.9436183398156603,
    -0.9426626635844167, -0.9417078467066555, -0.9407538867708823, -0.9398007813751988,
    -0.9388485281272505, -0.9378971246441744, -0.9369465685525478, -0.9359968574883364,
    -0.9350479890968441, -0.9340999610326616, -0.9331527709596166, -0.9322064165507239,
    -0.9312608954881356, -0.930316205463092, -0.9293723441758726, -0.9284293093357473,
    -0.9274870986609287, -0.9265457098785236, -0.9256051407244857, -0.9246653889435684,
    -0.9237264522892774, -0.9227883285238243, -0.9218510154180802, -0.9209145107515299,
    -0.9199788123122254, -0.9190439178967418, -0.9181098253101306, -0.9171765323658763,
    -0.9162440368858507, -0.9153123367002692, -0.9143814296476472, -0.9134513135747557,
    -0.9125219863365783, -0.9115934457962682, -0.9106656898251053, -0.9097387163024536,
    -0.9088125231157191, -0.9078871081603077, -0.9069624693395835, -0.9060386045648274,
    -0.9051155117551963, -0.9041931888376816, -0.903271633747069, -0.9023508444258979,
    -0.9014308188244216, -0.9005115549005672, -0.8995930506198964, -0.8986753039555654,
    -0.8977583128882868, -0.8968420754062901, -0.8959265895052835, -0.8950118531884151,
    -0.8940978644662357, -0.89318462135666, -0.8922721218849297, -0.8913603640835757,
    -0.8904493459923813, -0.8895390656583454, -0.8886295211356454, -0.8877207104856012,
    -0.8868126317766389, -0.885905283084255, -0.8849986624909801, -0.8840927680863445,
    -0.8831875979668418, -0.8822831502358943, -0.8813794230038187, -0.8804764143877905,
    -0.8795741225118103, -0.8786725455066697, -0.8777716815099167, -0.8768715286658225,
    -0.8759720851253479, -0.8750733490461096, -0.8741753185923476, -0.8732779919348922,
    -0.8723813672511307, -0.8714854427249756, -0.8705902165468321, -0.8696956869135657,
    -0.8688018520284706, -0.867908710101238, -0.8670162593479246, -0.8661244979909208,
    -0.8652334242589204, -0.8643430363868887, -0.8634533326160327, -0.8625643111937701,
    -0.8616759703736987, -0.8607883084155666, -0.8599013235852422, -0.8590150141546838,
    -0.8581293784019111, -0.8572444146109743, -0.8563601210719262, -0.855476496080792,
    -0.8545935379395412, -0.8537112449560583, -0.8528296154441146, -0.8519486477233396,
    -0.8510683401191925, -0.8501886909629349, -0.8493096985916022, -0.848431361347976,
    -0.8475536775805571, -0.8466766456435372, -0.8458002638967723, -0.8449245307057557,
    -0.8440494444415906, -0.8431750034809637, -0.8423012062061188, -0.8414280510048296,
    -0.8405555362703745, -0.8396836604015094, -0.8388124218024428, -0.8379418188828089,
    -0.8370718500576432, -0.8362025137473557, -0.8353338083777064, -0.8344657323797801,
    -0.8335982841899605, -0.8327314622499065, -0.8318652650065265, -0.8309996909119541,
    -0.8301347384235239, -0.8292704060037467, -0.8284066921202856, -0.8275435952459319,
    -0.8266811138585811, -0.8258192464412093, -0.8249579914818493, -0.8240973474735677,
    -0.8232373129144406, -0.8223778863075313, -0.8215190661608667, -0.8206608509874145,
    -0.8198032393050603, -0.8189462296365849, -0.8180898205096421, -0.8172340104567356,
    -0.8163787980151973, -0.8155241817271649, -0.8146701601395597, -0.8138167318040651,
    -0.8129638952771043, -0.812111649119819, -0.8112599918980478, -0.8104089221823043,
    -0.8095584385477568, -0.808708539574206, -0.8078592238460648, -0.8070104899523369,
    -0.8061623364865961, -0.8053147620469655, -0.8044677652360972, -0.8036213446611515,
    -0.8027754989337768, -0.8019302266700888, -0.8010855264906516, -0.8002413970204559,
    -0.799397836888901, -0.7985548447297734, -0.7977124191812284, -0.7968705588857693,
    -0.7960292624902291, -0.7951885286457503, -0.7943483560077661, -0.7935087432359812,
    -0.7926696889943526, -0.7918311919510709, -0.790993250778541, -0.7901558641533641,
    -0.7893190307563187, -0.788482749272342, -0.7876470183905114, -0.7868118368040268,
    -0.7859772032101917, -0.7851431163103955, -0.7843095748100951, -0.7834765774187976,
    -0.782644122850042, -0.7818122098213816, -0.7809808370543664, -0.7801500032745257,
    -0.7793197072113504, -0.7784899475982758, -0.7776607231726648, -0.7768320326757897,
    -0.7760038748528164, -0.7751762484527865, -0.774349152228601, -0.7735225849370031,
    -0.7726965453385619, -0.7718710321976554, -0.7710460442824545, -0.7702215803649061,
    -0.7693976392207169, -0.7685742196293376, -0.767751320373946, -0.7669289402414317,
    -0.7661070780223793, -0.7652857325110534, -0.7644649025053819, -0.7636445868069411,
    -0.7628247842209395, -0.7620054935562023, -0.7611867136251562, -0.7603684432438139,
    -0.7595506812317586, -0.7587334264121289, -0.7579166776116038, -0.7571004336603873,
    -0.7562846933921936, -0.7554694556442324, -0.7546547192571937, -0.7538404830752332,
    -0.7530267459459576, -0.7522135067204101, -0.7514007642530557, -0.7505885174017669,
    -0.7497767650278094, -0.7489655059958275, -0.74815473917383, -0.7473444634331765,
    -0.7465346776485626, -0.7457253806980063, -0.7449165714628342, -0.7441082488276671,
    -0.7433004116804071, -0.7424930589122227, -0.7416861894175365, -0.7408798020940105,
    -0.7400738958425332, -0.7392684695672062, -0.7384635221753303, -0.7376590525773928,
    -0.7368550596870541, -0.7360515424211345, -0.7352484996996008, -0.7344459304455541,
    -0.7336438335852158, -0.7328422080479156, -0.7320410527660781, -0.7312403666752105,
    -0.7304401487138896, -0.7296403978237491, -0.7288411129494673, -0.7280422930387543,
    -0.7272439370423401, -0.7264460439139616, -0.7256486126103506, -0.7248516420912217,
    -0.7240551313192597, -0.7232590792601078, -0.7224634848823555, -0.7216683471575265,
    -0.7208736650600668, -0.7200794375673327, -0.7192856636595795, -0.7184923423199489,
    -0.7176994725344578, -0.7169070532919868, -0.7161150835842683, -0.7153235624058751,
    -0.7145324887542088, -0.7137418616294886, -0.7129516800347397, -0.7121619429757824,
    -0.7113726494612201, -0.7105837985024293, -0.709795389113547, -0.709007420311461,
    -0.708219891115798, -0.7074328005489129, -0.7066461476358779, -0.7058599314044716,
    -0.7050741508851682, -0.704288805111127, -0.7035038931181812, -0.7027194139448274,
    -0.7019353666322155, -0.7011517502241374, -0.7003685637670172, -0.6995858063099001,
    -0.6988034769044427, -0.698021574604902, -0.6972400984681257, -0.6964590475535415,
    -0.695678420923147, -0.6948982176415, -0.6941184367757077, -0.6933390773954172,
    -0.6925601385728054, -0.6917816193825688, -0.6910035189019138, -0.690225836210547,
    -0.6894485703906652, -0.6886717205269456, -0.6878952857065362, -0.6871192650190462,
    -0.6863436575565363, -0.6855684624135089, -0.6847936786868992, -0.6840193054760652,
    -0.6832453418827782, -0.6824717870112138, -0.6816986399679426, -0.6809258998619202,
    -0.6801535658044789, -0.679381636909318, -0.6786101122924942, -0.6778389910724136,
    -0.6770682723698215, -0.676297955307794, -0.6755280390117289, -0.6747585226093366,
    -0.6739894052306313, -0.6732206860079223, -0.6724523640758048, -0.6716844385711515,
    -0.6709169086331035, -0.670149773403062, -0.6693830320246793, -0.6686166836438503,
    -0.6678507274087041, -0.6670851624695951, -0.666319987979095, -0.6655552030919837,
    -0.6647908069652415, -0.6640267987580404, -0.6632631776317357, -0.6624999427498579,
    -0.6617370932781045, -0.6609746283843315, -0.6602125472385454, -0.659450849012895,
    -0.6586895328816632, -0.6579285980212592, -0.6571680436102102, -0.6564078688291535,
    -0.6556480728608286, -0.6548886548900692, -0.6541296141037953, -0.6533709496910054,
    -0.6526126608427687, -0.6518547467522171, -0.651097206614538, -0.6503400396269658,
    -0.6495832449887752, -0.6488268219012725, -0.6480707695677889, -0.6473150871936723,
    -0.6465597739862802, -0.645804829154972, -0.6450502519111014, -0.6442960414680096,
    -0.6435421970410169, -0.6427887178474162, -0.6420356031064652, -0.6412828520393794,
    -0.6405304638693244, -0.6397784378214093, -0.639026773122679, -0.6382754690021071,
    -0.6375245246905891, -0.6367739394209349, -0.6360237124278618, -0.6352738429479878,
    -0.6345243302198242, -0.6337751734837688, -0.6330263719820988, -0.6322779249589642,
    -0.6315298316603807, -0.6307820913342229, -0.6300347032302174, -0.6292876665999361,
    -0.6285409806967894, -0.6277946447760197, -0.627048658094694, -0.6263030199116982,
    -0.6255577294877299, -0.6248127860852917, -0.6240681889686848, -0.6233239374040026,
    -0.6225800306591239, -0.6218364680037065, -0.6210932487091808, -0.6203503720487434,
    -0.6196078372973505, -0.6188656437317115, -0.6181237906302831, -0.6173822772732623,
    -0.6166411029425808, -0.6159002669218981, -0.6151597684965957, -0.6144196069537706,
    -0.6136797815822295, -0.6129402916724819, -0.6122011365167349, -0.6114623154088865,
    -0.6107238276445196, -0.609985672520896, -0.6092478493369503, -0.6085103573932842,
    -0.6077731959921601, -0.6070363644374954, -0.6062998620348566, -0.6055636880914532,
    -0.604827841916132, -0.6040923228193713, -0.6033571301132749, -0.6026222631115662,
    -0.6018877211295829, -0.6011535034842709, -0.6004196094941784, -0.5996860384794508,
    -0.5989527897618244, -0.5982198626646211, -0.5974872565127427, -0.5967549706326652,
    -0.5960230043524336, -0.5952913570016557, -0.5945600279114971, -0.5938290164146754,
    -0.5930983218454551, -0.5923679435396415, -0.5916378808345759, -0.5909081330691299,
    -0.5901786995837001, -0.5894495797202023, -0.5887207728220669, -0.5879922782342332,
    -0.5872640953031437, -0.5865362233767397, -0.5858086618044552, -0.5850814099372122,
    -0.5843544671274153, -0.5836278327289465, -0.58290150609716, -0.5821754865888771,
    -0.5814497735623813, -0.5807243663774126, -0.5799992643951632, -0.5792744669782719,
    -0.578549973490819, -0.5778257832983217, -0.5771018957677287, -0.5763783102674156,
    -0.5756550261671796, -0.5749320428382347, -0.574209359653207, -0.5734869759861292,
    -0.5727648912124365, -0.5720431047089611, -0.5713216158539278, -0.570600424026949,
    -0.5698795286090198, -0.5691589289825135, -0.5684386245311766, -0.567718614640124,
    -0.5669988986958346, -0.5662794760861467, -0.5655603462002525, -0.5648415084286944,
    -0.5641229621633598, -0.5634047067974767, -0.562686741725609, -0.5619690663436518,
    -0.5612516800488274, -0.56053458223968, -0.5598177723160715, -0.5591012496791772,
    -0.5583850137314809, -0.5576690638767708, -0.5569533995201349, -0.5562380200679564,
    -0.5555229249279096, -0.554808113508955, -0.5540935852213357, -0.5533793394765723,
    -0.5526653756874588, -0.5519516932680584, -0.5512382916336991, -0.5505251702009694,
    -0.5498123283877139, -0.5490997656130292, -0.5483874812972597, -0.5476754748619931,
    -0.5469637457300565, -0.546252293325512, -0.5455411170736526, -0.5448302164009983,
    -0.5441195907352913, -0.5434092395054924, -0.5426991621417768, -0.5419893580755301,
    -0.5412798267393437, -0.5405705675670115, -0.5398615799935252, -0.5391528634550709,
    -0.5384444173890242, -0.537736241233947, -0.5370283344295835, -0.5363206964168558,
    -0.5356133266378599, -0.5349062245358622, -0.5341993895552954, -0.5334928211417546,
    -0.5327865187419931, -0.5320804818039192, -0.5313747097765916, -0.5306692021102162,
    -0.5299639582561417, -0.5292589776668563, -0.5285542597959834, -0.5278498040982783,
    -0.5271456100296242, -0.5264416770470284, -0.5257380046086184, -0.5250345921736388,
    -0.5243314392024468, -0.5236285451565091, -0.5229259094983979, -0.5222235316917873,
    -0.5215214112014497, -0.5208195474932522, -0.5201179400341528, -0.519416588292197,
    -0.5187154917365139, -0.518014649837313, -0.5173140620658805, -0.5166137278945754,
    -0.5159136467968265, -0.5152138182471284, -0.5145142417210383, -0.5138149166951724,
    -0.5131158426472023, -0.5124170190558518, -0.5117184454008931, -0.5110201211631434,
    -0.510322045824462, -0.5096242188677459, -0.5089266397769274, -0.50822930803697,
    -0.5075322231338653, -0.5068353845546295, -0.5061387917873004, -0.5054424443209333,
    -0.5047463416455987, -0.504050483252378, -0.5033548686333608, -0.5026594972816413,
    -0.5019643686913152, -0.5012694823574765, -0.5005748377762138, -0.49988043444460767,
    -0.4991862718607268, -0.49849234952362526, -0.497798666933339, -0.4971052235908829,
    -0.4964120189982473, -0.49571905265839494, -0.495026324075258, -0.49433383275373455,
    -0.4936415781996858, -0.4929495599199327, -0.49225777742225296, -0.4915662302153779,
    -0.4908749178089893, -0.4901838397137165, -0.4894929954411331, -0.4888023845037542,
    -0.48811200641503283, -0.48742186068935756, -0.486731946842049, -0.48604226438935705,
    -0.48535281284845766, -0.48466359173745005, -0.4839746005753537, -0.4832858388821052,
    -0.4825973061785555, -0.48190900198646686, -0.48122092582850995, -0.4805330772282609,
    -0.4798454557101983, -0.4791580607997006, -0.4784708920230427, -0.4777839489073937,
    -0.4770972309808133, -0.4764107377722496, -0.47572446881153596, -0.475038423629388,
    -0.474352601757401, -0.4736670027280471, -0.47298162607467237, -0.47229647133149394,
    -0.47161153803359734, -0.47092682571693373, -0.470242333918317, -0.4695580621754211,
    -0.46887401002677737, -0.46819017701177157, -0.46750656267064133, -0.4668231665444734,
    -0.46613998817520086, -0.4654570271056005, -0.46477428287929007, -0.4640917550407256,
    -0.4634094431351988, -0.46272734670883425, -0.462045465308587, -0.4613637984822395,
    -0.4606823457783995, -0.4600011067464969, -0.45932008093678156, -0.45863926790032034,
    -0.45795866718899475, -0.45727827835549834, -0.45659810095333386, -0.45591813453681107,
    -0.4552383786610439, -0.4545588328819479, -0.453879496756238, -0.45320036984142553,
    -0.452521451695816, -0.4518427418785064, -0.45116423994938304, -0.45048594546911847,
    -0.4498078579991695, -0.4491299771017745, -0.4484523023399509, -0.4477748332774929,
    -0.44709756947896867, -0.44642051050971826, -0.445743655935851, -0.4450670053242431,
    -0.4443905582425351, -0.4437143142591297, -0.4430382729431892, -0.442362433864633,
    -0.4416867965941354, -0.4410113607031232, -0.4403361257637732, -0.4396610913490098,
    -0.43898625703250305, -0.4383116223886657, -0.4376371869926513, -0.43696295042035166,
    -0.4362889122483946, -0.4356150720541416, -0.4349414294156856, -0.43426798391184845,
    -0.4335947351221789, -0.4329216826269501, -0.43224882600715747, -0.43157616484451633,
    -0.43090369872145967, -0.4302314272211359, -0.4295593499274066, -0.4288874664248442,
    -0.42821577629873003, -0.42754427913505166, -0.4268729745205011, -0.42620186204247223,
    -0.4255309412890589, -0.4248602118490525, -0.42418967331193996, -0.4235193252679015,
    -0.4228491673078083, -0.42217919902322065, -0.4215094200063855, -0.42083982985023455,
    -0.4201704281483818, -0.4195012144951217, -0.41883218848542686, -0.4181633497149461,
    -0.41749469778000214, -0.4168262322775895, -0.4161579528053726, -0.4154898589616834,
    -0.4148219503455195, -0.414154226556542, -0.4134866871950734, -0.41281933186209563,
    -0.4121521601592478, -0.4114851716888244, -0.41081836605377303, -0.4101517428576924,
    -0.40948530170483044, -0.40881904220008214, -0.4081529639489876, -0.40748706655772987,
    -0.40682134963313316, -0.4061558127826607, -0.4054904556144128, -0.40482527773712484,
    -0.40416027876016525, -0.40349545829353356, -0.4028308159478586, -0.40216635133439615,
    -0.4015020640650274, -0.4008379537522568, -0.40017402000921004, -0.39951026244963234,
    -0.39884668068788626, -0.39818327433895, -0.3975200430184154, -0.396856986342486,
    -0.3961941039279751, -0.395531395392304, -0.3948688603534999, -0.3942064984301942,
    -0.3935443092416206, -0.3928822924076131, -0.39222044754860425, -0.3915587742856232,
    -0.39089727224029397, -0.3902359410348334, -0.3895747802920495, -0.3889137896353395,
    -0.3882529686886881, -0.3875923170766654, -0.3869318344244255, -0.3862715203577044,
    -0.38561137450281807, -0.384951396486661, -0.3842915859367041, -0.3836319424809931,
    -0.38297246574814653, -0.38231315536735433, -0.38165401096837565, -0.38099503218153724,
    -0.38033621863773187, -0.37967756996841623, -0.37901908580560945, -0.37836076578189126,
    -0.37770260953040014, -0.37704461668483175, -0.3763867868794371, -0.3757291197490209,
    -0.3750716149289397, -0.3744142720551003, -0.373757090763958, -0.3731000706925149,
    -0.3724432114783181, -0.37178651275945823, -0.37112997417456756, -0.3704735953628183,
    -0.3698173759639211, -0.3691613156181232, -0.3685054139662069, -0.3678496706494878,
    -0.3671940853098131, -0.36653865758956017, -0.36588338713163454, -0.3652282735794686,
    -0.3645733165770197, -0.36391851576876877, -0.3632638707997185, -0.3626093813153917,
    -0.3619550469618299, -0.36130086738559136, -0.3606468422337499, -0.3599929711538929,
    -0.3593392537941201, -0.3586856898030415, -0.3580322788297763, -0.35737902052395093,
    -0.3567259145356977, -0.35607296051565296, -0.35542015811495586, -0.3547675069852466,
    -0.3541150067786648, -0.35346265714784814, -0.35281045774593056, -0.352158408226541,
    -0.35150650824380153, -0.3508547574523262, -0.3502031555072191, -0.3495517020640731,
    -0.3489003967789682, -0.34824923930847024, -0.3475982293096289, -0.3469473664399767,
    -0.34629665035752716, -0.3456460807207735, -0.3449956571886871, -0.3443453794207157,
    -0.34369524707678245, -0.34304525981728407, -0.34239541730308937, -0.3417457191955379,
    -0.3410961651564385, -0.3404467548480675, -0.3397974879331679, -0.33914836407494714,
    -0.33849938293707627, -0.3378505441836881, -0.33720184747937604, -0.33655329248919247,
    -0.3359048788786473, -0.33525660631370663, -0.33460847446079134, -0.33396048298677555,
    -0.3333126315589852, -0.3326649198451968, -0.33201734751363576, -0.3313699142329752,
    -0.3307226196723344, -0.3300754635012776, -0.3294284453898123, -0.3287815650083881,
    -0.32813482202789523, -0.32748821611966317, -0.32684174695545926, -0.32619541420748727,
    -0.3255492175483862, -0.32490315665122876, -0.32425723118951993, -0.32361144083719584,
    -0.3229657852686222, -0.322320264158593, -0.32167487718232923, -0.32102962401547747,
    -0.32038450433410853, -0.31973951781471616, -0.31909466413421567, -0.3184499429699426,
    -0.31780535399965143, -0.3171608969015142, -0.3165165713541193, -0.31587237703647003,
    -0.3152283136279832, -0.31458438080848816, -0.31394057825822513, -0.31329690565784407,
    -0.3126533626884034, -0.3120099490313685, -0.3113666643686109, -0.3107235083824063,
    -0.31008048075543393, -0.3094375811707748, -0.30879480931191067, -0.30815216486272273,
    -0.3075096475074903, -0.3068672569308897, -0.30622499281799254, -0.30558285485426506,
    -0.3049408427255665, -0.30429895611814783, -0.3036571947186508, -0.30301555821410636,
    -0.30237404629193354, -0.3017326586399383, -0.30109139494631215, -0.300450254899631,
    -0.29980923818885385, -0.2991683445033217, -0.29852757353275616, -0.2978869249672583,
    -0.2972463984973076, -0.2966059938137604, -0.2959657106078489, -0.29532554857117993,
    -0.29468550739573374, -0.2940455867738628, -0.2934057863982905, -0.2927661059621102,
    -0.2921265451587838, -0.29148710368214054, -0.290847781226376, -0.2902085774860508,
    -0.2895694921560894, -0.28893052493177906, -0.28829167550876844, -0.28765294358306664,
    -0.28701432885104194, -0.2863758310094206, -0.28573744975528576, -0.28509918478607627,
    -0.2844610357995855, -0.2838230024939602, -0.2831850845676995, -0.2825472817196534,
    -0.281909593649022, -0.28127202005535423, -0.2806345606385465, -0.279997215098842,
    -0.27935998313682914, -0.2787228644534407, -0.2780858587499525, -0.27744896572798255,
    -0.27681218508948957, -0.2761755165367722, -0.2755389597724677, -0.2749025144995508,
    -0.2742661804213328, -0.2736299572414602, -0.2729938446639139, -0.2723578423930078,
    -0.2717219501333879, -0.27108616759003107, -0.27045049446824404, -0.2698149304736623,
    -0.26917947531224895, -0.26854412869029376, -0.26790889031441195, -0.2672737598915431,
    -0.26663873712895025, -0.26600382173421855, -0.26536901341525443, -0.2647343118802844,
    -0.26409971683785405, -0.263465227996827, -0.26283084506638366, -0.26219656775602046,
    -0.2615623957755485, -0.26092832883509276, -0.26029436664509087, -0.25966050891629205,
    -0.2590267553597563, -0.258393105686853, -0.25775955960926017, -0.2571261168389633,
    -0.2564927770882543, -0.2558595400697305, -0.2552264054962936, -0.2545933730811487,
    -0.25396044253780325, -0.25332761358006595, -0.25269488592204575, -0.25206225927815096,
    -0.25142973336308805, -0.2507973078918608, -0.2501649825797691, -0.24953275714240816,
    -0.2489006312956674, -0.24826860475572934, -0.24763667723906882, -0.24700484846245177,
    -0.24637311814293436, -0.24574148599786197, -0.2451099517448682, -0.2444785151018738,
    -0.24384717578708584, -0.2432159335189966, -0.24258478801638259, -0.24195373899830364,
    -0.24132278618410186, -0.24069192929340066, -0.24006116804610386, -0.2394305021623946,
    -0.2387999313627344, -0.23816945536786224, -0.2375390738987936, -0.23690878667681944,
    -0.23627859342350524, -0.2356484938606901, -0.23501848771048567, -0.23438857469527535,
    -0.23375875453771322, -0.23312902696072313, -0.23249939168749773, -0.23186984844149755,
    -0.23124039694645004, -0.23061103692634863, -0.2299817681054518, -0.22935259020828208,
    -0.22872350295962524, -0.2280945060845292, -0.22746559930830323, -0.22683678235651697,
    -0.22620805495499946, -0.22557941682983826, -0.22495086770737854, -0.22432240731422212,
    -0.22369403537722654, -0.22306575162350423, -0.22243755578042146, -0.2218094475755975,
    -0.22118142673690377, -0.2205534929924628, -0.21992564607064738, -0.2192978857000797,
    -0.21867021160963035, -0.2180426235284175, -0.21741512118580597, -0.21678770431140632,
    -0.21616037263507396, -0.21553312588690826, -0.21490596379725163, -0.2142788860966887,
    -0.21365189251604533, -0.21302498278638782, -0.21239815663902195, -0.2117714138054921,
    -0.21114475401758048, -0.21051817700730607, -0.20989168250692386, -0.20926527024892397,
    -0.2086389399660307, -0.20801269139120176, -0.20738652425762735, -0.20676043829872923,
    -0.20613443324815994, -0.20550850883980196, -0.20488266480776668, -0.2042569008863937,
    -0.20363121681024993, -0.2030056123141287, -0.20238008713304892, -0.2017546410022542,
    -0.20112927365721206, -0.20050398483361298, -0.19987877426736966, -0.1992536416946161,
    -0.19862858685170676, -0.19800360947521572, -0.19737870930193585, -0.19675388606887795,
    -0.1961291395132699, -0.19550446937255592, -0.19487987538439552, -0.19425535728666288,
    -0.1936309148174459, -0.19300654771504544, -0.1923822557179744, -0.19175803856495693,
    -0.19113389599492767, -0.1905098277470308, -0.18988583356061928, -0.18926191317525407,
    -0.18863806633070324, -0.18801429276694118, -0.18739059222414775, -0.18676696444270752,
    -0.1861434091632089, -0.18551992612644339, -0.18489651507340465, -0.18427317574528787,
    -0.18364990788348876, -0.1830267112296029, -0.18240358552542485, -0.18178053051294737,
    -0.18115754593436062, -0.18053463153205132, -0.17991178704860203, -0.1792890122267903,
    -0.17866630680958784, -0.1780436705401598, -0.17742110316186388, -0.17679860441824966,
    -0.1761761740530577, -0.17555381181021876, -0.1749315174338531, -0.1743092906682696,
    -0.17368713125796506, -0.1730650389476233, -0.1724430134821144, -0.17182105460649408,
    -0.1711991620660027, -0.1705773356060646, -0.16995557497228733, -0.16933387991046078,
    -0.16871225016655653, -0.16809068548672698, -0.16746918561730462, -0.16684775030480123,
    -0.16622637929590714, -0.16560507233749044, -0.16498382917659626, -0.16436264956044594,
    -0.16374153323643628, -0.1631204799521388, -0.162499489455299, -0.16187856149383548,
    -0.16125769581583935, -0.16063689216957333, -0.1600161503034711, -0.15939546996613646,
    -0.1587748509063426, -0.1581542928730314, -0.15753379561531258, -0.15691335888246305,
    -0.15629298242392609, -0.15567266598931062, -0.15505240932839046, -0.1544322121911036,
    -0.15381207432755137, -0.15319199548799786, -0.152571975422869, -0.15195201388275192,
    -0.15133211061839422, -0.15071226538070315, -0.15009247792074495, -0.14947274798974408,
    -0.14885307533908249, -0.14823345972029886, -0.1476139008850879, -0.14699439858529964,
    -0.14637495257293862, -0.14575556260016323, -0.14513622841928495, -0.14451694978276763,
    -0.1438977264432268, -0.14327855815342883, -0.14265944466629035, -0.14204038573487743,
    -0.14142138111240488, -0.14080243055223557, -0.14018353380787962, -0.13956469063299382,
    -0.13894590078138072, -0.13832716400698813, -0.1377084800639082, -0.1370898487063769,
    -0.13647126968877307, -0.13585274276561798, -0.1352342676915744, -0.13461584422144598,
    -0.13399747211017657, -0.13337915111284943, -0.13276088098468655, -0.132142661481048,
    -0.1315244923574312, -0.13090637336947009, -0.13028830427293464, -0.12967028482372997,
    -0.12905231477789575, -0.12843439389160546, -0.12781652192116572, -0.12719869862301547,
    -0.12658092375372548, -0.1259631970699975, -0.12534551832866359, -0.12472788728668542,
    -0.12411030370115364, -0.12349276732928711, -0.12287527792843225, -0.12225783525606233,
    -0.12164043906977678, -0.12102308912730052, -0.12040578518648323, -0.11978852700529871,
    -0.11917131434184415, -0.11855414695433948, -0.11793702460112666, -0.11731994704066902,
    -0.11670291403155052, -0.11608592533247512, -0.11546898070226612, -0.11485207989986539,
    -0.11423522268433275, -0.11361840881484533, -0.11300163805069678, -0.1123849101512967,
    -0.11176822487616989, -0.1111515819849557, -0.11053498123740739, -0.10991842239339138,
    -0.10930190521288664, -0.10868542945598399, -0.10806899488288542, -0.10745260125390343,
    -0.10683624832946038, -0.10621993587008777, -0.10560366363642561, -0.10498743138922174,
    -0.10437123888933118, -0.10375508589771543, -0.1031389721754418, -0.10252289748368278,
    -0.10190686158371537, -0.10129086423692038, -0.10067490520478183, -0.10005898424888619,
    -0.09944310113092183, -0.09882725561267829, -0.0982114474560456, -0.0975956764230137,
    -0.09697994227567172, -0.09636424477620734, -0.0957485836869061, -0.09513295877015082,
    -0.09451736978842086, -0.09390181650429152, -0.09328629868043335, -0.09267081607961153,
    -0.09205536846468516, -0.09143995559860668, -0.09082457724442118, -0.09020923316526572,
    -0.08959392312436873, -0.08897864688504935, -0.08836340421071673, -0.08774819486486946,
    -0.08713301861109485, -0.08651787521306832, -0.08590276443455276, -0.08528768603939785,
    -0.08467263979153943, -0.08405762545499887, -0.0834426427938824, -0.08282769157238049,
    -0.08221277155476717, -0.08159788250539943, -0.08098302418871654, -0.08036819636923945,
    -0.07975339881157009, -0.07913863128039081, -0.07852389354046363, -0.0779091853566297,
    -0.07729450649380863, -0.07667985671699783, -0.07606523579127186, -0.07545064348178186,
    -0.07483607955375486, -0.07422154377249314, -0.07360703590337361, -0.07299255571184719,
    -0.07237810296343815, -0.07176367742374347, -0.07114927885843222, -0.07053490703324494,
    -0.06992056171399298, -0.06930624266655788, -0.06869194965689074, -0.06807768245101158,
    -0.06746344081500873, -0.06684922451503816, -0.0662350333173229, -0.06562086698815235,
    -0.06500672529388171, -0.06439260800093133, -0.06377851487578605, -0.06316444568499462,
    -0.06255040019516904, -0.061936378172983954, -0.061322379385176005, -0.06070840359854322,
    -0.060094450579944385, -0.05948052009629841, -0.058866611914583714, -0.0582527258018376,
    -0.05763886152515562, -0.05702501885169096, -0.05641119754865381, -0.05579739738331077,
    -0.055183618122984175, -0.05456985953505151, -0.053956121386944784, -0.0533424034461499,
    -0.05272870548020604, -0.05211502725670505, -0.051501368543290786, -0.05088772910765854,
    -0.05027410871755441, -0.04966050714077464, -0.04904692414516506, -0.048433359498620425,
    -0.047819812969083816, -0.04720628432454601, -0.04659277333304487, -0.04597927976266475,
    -0.04536580338153581, -0.044752343957833486, -0.044138901259777805, -0.04352547505563281,
    -0.042912065113705926, -0.04229867120234735, -0.04168529308994943, -0.04107193054494605,
    -0.04045858333581204, -0.03984525123106251, -0.039231933999252296, -0.038618631408975305,
    -0.03800534322886391, -0.03739206922758835, -0.036778809173856106, -0.03616556283641128,
    -0.03555232998403401, -0.03493911038553982, -0.03432590380977904, -0.03371271002563619,
    -0.033099528802029335, -0.03248635990790953, -0.03187320311226016, -0.03126005818409635,
    -0.03064692489246436, -0.03003380300644095, -0.029420692295132805, -0.028807592527675896,
    -0.02819450347323488, -0.0275814249010025, -0.02696835658019895, -0.0263552982800713,
    -0.025742249769892856, -0.02512921081896257, -0.024516181196604425, -0.023903160672166825,
    -0.023290149015021994, -0.022677145994565353, -0.022064151380214926, -0.02145116494141073,
    -0.020838186447614156, -0.02022521566830738, -0.01961225237299274, -0.01899929633119214,
    -0.018386347312446424, -0.017773405086314795, -0.01716046942237419, -0.016547540090218676,
    -0.01593461685945885, -0.015321699499721222, -0.014708787780647617, -0.014095881471894568,
    -0.013482980343132703, -0.012870084164046149, -0.012257192704331914, -0.011644305733699293,
    -0.011031423021869251, -0.010418544338573827, -0.009805669453555522, -0.009192798136566694,
    -0.008579930157368954, -0.007967065285732561, -0.007354203291435814, -0.0067413439442644465,
    -0.006128487014011024, -0.005515632270474338, -0.004902779483458796, -0.004289928422773824,
    -0.0036770788582332547, -0.003064230559654726, -0.002451383296859073, -0.0018385368396697252,
    -0.0012256909579121, -0.0006128454214129989, 0.0, 0.0006128454214129989,
    0.0012256909579121, 0.0018385368396697252, 0.002451383296859073, 0.003064230559654726,
    0.0036770788582332547, 0.004289928422773824, 0.004902779483458796, 0.005515632270474338,
    0.006128487014011024, 0.0067413439442644465, 0.007354203291435814, 0.007967065285732561,
    0.008579930157368954, 0.009192798136566694, 0.009805669453555522, 0.010418544338573827,
    0.011031423021869251, 0.011644305733699293, 0.012257192704331914, 0.012870084164046149,
    0.013482980343132703, 0.014095881471894568, 0.014708787780647617, 0.015321699499721222,
    0.01593461685945885, 0.016547540090218676, 0.01716046942237419, 0.017773405086314795,
    0.018386347312446424, 0.01899929633119214, 0.01961225237299274, 0.02022521566830738,
    0.020838186447614156, 0.02145116494141073, 0.022064151380214926, 0.022677145994565353,
    0.023290149015021994, 0.023903160672166825, 0.024516181196604425, 0.02512921081896257,
    0.025742249769892856, 0.0263552982800713, 0.02696835658019895, 0.0275814249010025,
    0.02819450347323488, 0.028807592527675896, 0.029420692295132805, 0.03003380300644095,
    0.03064692489246436, 0.03126005818409635, 0.03187320311226016, 0.03248635990790953,
    0.033099528802029335, 0.03371271002563619, 0.03432590380977904, 0.03493911038553982,
    0.03555232998403401, 0.03616556283641128, 0.036778809173856106, 0.03739206922758835,
    0.03800534322886391, 0.038618631408975305, 0.039231933999252296, 0.03984525123106251,
    0.04045858333581204, 0.04107193054494605, 0.04168529308994943, 0.04229867120234735,
    0.042912065113705926, 0.04352547505563281, 0.044138901259777805, 0.044752343957833486,
    0.04536580338153581, 0.04597927976266475, 0.04659277333304487, 0.04720628432454601,
    0.047819812969083816, 0.048433359498620425, 0.04904692414516506, 0.04966050714077464,
    0.05027410871755441, 0.05088772910765854, 0.051501368543290786, 0.05211502725670505,
    0.05272870548020604, 0.0533424034461499, 0.053956121386944784, 0.05456985953505151,
    0.055183618122984175, 0.05579739738331077, 0.05641119754865381, 0.05702501885169096,
    0.05763886152515562, 0.0582527258018376, 0.058866611914583714, 0.05948052009629841,
    0.060094450579944385, 0.06070840359854322, 0.061322379385176005, 0.061936378172983954,
    0.06255040019516904, 0.06316444568499462, 0.06377851487578605, 0.06439260800093133,
    0.06500672529388171, 0.06562086698815235, 0.0662350333173229, 0.06684922451503816,
    0.06746344081500873, 0.06807768245101158, 0.06869194965689074, 0.06930624266655788,
    0.06992056171399298, 0.07053490703324494, 0.07114927885843222, 0.07176367742374347,
    0.07237810296343815, 0.07299255571184719, 0.07360703590337361, 0.07422154377249314,
    0.07483607955375486, 0.07545064348178186, 0.07606523579127186, 0.07667985671699783,
    0.07729450649380863, 0.0779091853566297, 0.07852389354046363, 0.07913863128039081,
    0.07975339881157009, 0.08036819636923945, 0.08098302418871654, 0.08159788250539943,
    0.08221277155476717, 0.08282769157238049, 0.0834426427938824, 0.08405762545499887,
    0.08467263979153943, 0.08528768603939785, 0.08590276443455276, 0.08651787521306832,
    0.08713301861109485, 0.08774819486486946, 0.08836340421071673, 0.08897864688504935,
    0.08959392312436873, 0.09020923316526572, 0.09082457724442118, 0.09143995559860668,
    0.09205536846468516, 0.09267081607961153, 0.09328629868043335, 0.09390181650429152,
    0.09451736978842086, 0.09513295877015082, 0.0957485836869061, 0.09636424477620734,
    0.09697994227567172, 0.0975956764230137, 0.0982114474560456, 0.09882725561267829,
    0.09944310113092183, 0.10005898424888619, 0.10067490520478183, 0.10129086423692038,
    0.10190686158371537, 0.10252289748368278, 0.1031389721754418, 0.10375508589771543,
    0.10437123888933118, 0.10498743138922174, 0.10560366363642561, 0.10621993587008777,
    0.10683624832946038, 0.10745260125390343, 0.10806899488288542, 0.10868542945598399,
    0.10930190521288664, 0.10991842239339138, 0.11053498123740739, 0.1111515819849557,
    0.11176822487616989, 0.1123849101512967, 0.11300163805069678, 0.11361840881484533,
    0.11423522268433275, 0.11485207989986539, 0.11546898070226612, 0.11608592533247512,
    0.11670291403155052, 0.11731994704066902, 0.11793702460112666, 0.11855414695433948,
    0.11917131434184415, 0.11978852700529871, 0.12040578518648323, 0.12102308912730052,
    0.12164043906977678, 0.12225783525606233, 0.12287527792843225, 0.12349276732928711,
    0.12411030370115364, 0.12472788728668542, 0.12534551832866359, 0.1259631970699975,
    0.12658092375372548, 0.12719869862301547, 0.12781652192116572, 0.12843439389160546,
    0.12905231477789575, 0.12967028482372997, 0.13028830427293464, 0.13090637336947009,
    0.1315244923574312, 0.132142661481048, 0.13276088098468655, 0.13337915111284943,
    0.13399747211017657, 0.13461584422144598, 0.1352342676915744, 0.13585274276561798,
    0.13647126968877307, 0.1370898487063769, 0.1377084800639082, 0.13832716400698813,
    0.13894590078138072, 0.13956469063299382, 0.14018353380787962, 0.14080243055223557,
    0.14142138111240488, 0.14204038573487743, 0.14265944466629035, 0.14327855815342883,
    0.1438977264432268, 0.14451694978276763, 0.14513622841928495, 0.14575556260016323,
    0.14637495257293862, 0.14699439858529964, 0.1476139008850879, 0.14823345972029886,
    0.14885307533908249, 0.14947274798974408, 0.15009247792074495, 0.15071226538070315,
    0.15133211061839422, 0.15195201388275192, 0.152571975422869, 0.15319199548799786,
    0.15381207432755137, 0.1544322121911036, 0.15505240932839046, 0.15567266598931062,
    0.15629298242392609, 0.15691335888246305, 0.15753379561531258, 0.1581542928730314,
    0.1587748509063426, 0.15939546996613646, 0.1600161503034711, 0.16063689216957333,
    0.16125769581583935, 0.16187856149383548, 0.162499489455299, 0.1631204799521388,
    0.16374153323643628, 0.16436264956044594, 0.16498382917659626, 0.16560507233749044,
    0.16622637929590714, 0.16684775030480123, 0.16746918561730462, 0.16809068548672698,
    0.16871225016655653, 0.16933387991046078, 0.16995557497228733, 0.1705773356060646,
    0.1711991620660027, 0.17182105460649408, 0.1724430134821144, 0.1730650389476233,
    0.17368713125796506, 0.1743092906682696, 0.1749315174338531, 0.17555381181021876,
    0.1761761740530577, 0.17679860441824966, 0.17742110316186388, 0.1780436705401598,
    0.17866630680958784, 0.1792890122267903, 0.17991178704860203, 0.18053463153205132,
    0.18115754593436062, 0.18178053051294737, 0.18240358552542485, 0.1830267112296029,
    0.18364990788348876, 0.18427317574528787, 0.18489651507340465, 0.18551992612644339,
    0.1861434091632089, 0.18676696444270752, 0.18739059222414775, 0.18801429276694118,
    0.18863806633070324, 0.18926191317525407, 0.18988583356061928, 0.1905098277470308,
    0.19113389599492767, 0.19175803856495693, 0.1923822557179744, 0.19300654771504544,
    0.1936309148174459, 0.19425535728666288, 0.19487987538439552, 0.19550446937255592,
    0.1961291395132699, 0.19675388606887795, 0.19737870930193585, 0.19800360947521572,
    0.19862858685170676, 0.1992536416946161, 0.19987877426736966, 0.20050398483361298,
    0.20112927365721206, 0.2017546410022542, 0.20238008713304892, 0.2030056123141287,
    0.20363121681024993, 0.2042569008863937, 0.20488266480776668, 0.20550850883980196,
    0.20613443324815994, 0.20676043829872923, 0.20738652425762735, 0.20801269139120176,
    0.2086389399660307, 0.20926527024892397, 0.20989168250692386, 0.21051817700730607,
    0.21114475401758048, 0.2117714138054921, 0.21239815663902195, 0.21302498278638782,
    0.21365189251604533, 0.2142788860966887, 0.21490596379725163, 0.21553312588690826,
    0.21616037263507396, 0.21678770431140632, 0.21741512118580597, 0.2180426235284175,
    0.21867021160963035, 0.2192978857000797, 0.21992564607064738, 0.2205534929924628,
    0.22118142673690377, 0.2218094475755975, 0.22243755578042146, 0.22306575162350423,
    0.22369403537722654, 0.22432240731422212, 0.22495086770737854, 0.22557941682983826,
    0.22620805495499946, 0.22683678235651697, 0.22746559930830323, 0.2280945060845292,
    0.22872350295962524, 0.22935259020828208, 0.2299817681054518, 0.23061103692634863,
    0.23124039694645004, 0.23186984844149755, 0.23249939168749773, 0.23312902696072313,
    0.23375875453771322, 0.23438857469527535, 0.23501848771048567, 0.2356484938606901,
    0.23627859342350524, 0.23690878667681944, 0.2375390738987936, 0.23816945536786224,
    0.2387999313627344, 0.2394305021623946, 0.24006116804610386, 0.24069192929340066,
    0.24132278618410186, 0.24195373899830364, 0.24258478801638259, 0.2432159335189966,
    0.24384717578708584, 0.2444785151018738, 0.2451099517448682, 0.24574148599786197,
    0.24637311814293436, 0.24700484846245177, 0.24763667723906882, 0.24826860475572934,
    0.2489006312956674, 0.24953275714240816, 0.2501649825797691, 0.2507973078918608,
    0.25142973336308805, 0.25206225927815096, 0.25269488592204575, 0.25332761358006595,
    0.25396044253780325, 0.2545933730811487, 0.2552264054962936, 0.2558595400697305,
    0.2564927770882543, 0.2571261168389633, 0.25775955960926017, 0.258393105686853,
    0.2590267553597563, 0.25966050891629205, 0.26029436664509087, 0.26092832883509276,
    0.2615623957755485, 0.26219656775602046, 0.26283084506638366, 0.263465227996827,
    0.26409971683785405, 0.2647343118802844, 0.26536901341525443, 0.26600382173421855,
    0.26663873712895025, 0.2672737598915431, 0.26790889031441195, 0.26854412869029376,
    0.26917947531224895, 0.2698149304736623, 0.27045049446824404, 0.27108616759003107,
    0.2717219501333879, 0.2723578423930078, 0.2729938446639139, 0.2736299572414602,
    0.2742661804213328, 0.2749025144995508, 0.2755389597724677, 0.2761755165367722,
    0.27681218508948957, 0.27744896572798255, 0.2780858587499525, 0.2787228644534407,
    0.27935998313682914, 0.279997215098842, 0.2806345606385465, 0.28127202005535423,
    0.281909593649022, 0.2825472817196534, 0.2831850845676995, 0.2838230024939602,
    0.2844610357995855, 0.28509918478607627, 0.28573744975528576, 0.2863758310094206,
    0.28701432885104194, 0.28765294358306664, 0.28829167550876844, 0.28893052493177906,
    0.2895694921560894, 0.2902085774860508, 0.290847781226376, 0.29148710368214054,
    0.2921265451587838, 0.2927661059621102, 0.2934057863982905, 0.2940455867738628,
    0.29468550739573374, 0.29532554857117993, 0.2959657106078489, 0.2966059938137604,
    0.2972463984973076, 0.2978869249672583, 0.29852757353275616, 0.2991683445033217,
    0.29980923818885385, 0.300450254899631, 0.30109139494631215, 0.3017326586399383,
    0.30237404629193354, 0.30301555821410636, 0.3036571947186508, 0.30429895611814783,
    0.3049408427255665, 0.30558285485426506, 0.30622499281799254, 0.3068672569308897,
    0.3075096475074903, 0.30815216486272273, 0.30879480931191067, 0.3094375811707748,
    0.31008048075543393, 0.3107235083824063, 0.3113666643686109, 0.3120099490313685,
    0.3126533626884034, 0.31329690565784407, 0.31394057825822513, 0.31458438080848816,
    0.3152283136279832, 0.31587237703647003, 0.3165165713541193, 0.3171608969015142,
    0.31780535399965143, 0.3184499429699426, 0.31909466413421567, 0.31973951781471616,
    0.32038450433410853, 0.32102962401547747, 0.32167487718232923, 0.322320264158593,
    0.3229657852686222, 0.32361144083719584, 0.32425723118951993, 0.32490315665122876,
    0.3255492175483862, 0.32619541420748727, 0.32684174695545926, 0.32748821611966317,
    0.32813482202789523, 0.3287815650083881, 0.3294284453898123, 0.3300754635012776,
    0.3307226196723344, 0.3313699142329752, 0.33201734751363576, 0.3326649198451968,
    0.3333126315589852, 0.33396048298677555, 0.33460847446079134, 0.33525660631370663,
    0.3359048788786473, 0.33655329248919247, 0.33720184747937604, 0.3378505441836881,
    0.33849938293707627, 0.33914836407494714, 0.3397974879331679, 0.3404467548480675,
    0.3410961651564385, 0.3417457191955379, 0.34239541730308937, 0.34304525981728407,
    0.34369524707678245, 0.3443453794207157, 0.3449956571886871, 0.3456460807207735,
    0.34629665035752716, 0.3469473664399767, 0.3475982293096289, 0.34824923930847024,
    0.3489003967789682, 0.3495517020640731, 0.3502031555072191, 0.3508547574523262,
    0.35150650824380153, 0.352158408226541, 0.35281045774593056, 0.35346265714784814,
    0.3541150067786648, 0.3547675069852466, 0.35542015811495586, 0.35607296051565296,
    0.3567259145356977, 0.35737902052395093, 0.3580322788297763, 0.3586856898030415,
    0.3593392537941201, 0.3599929711538929, 0.3606468422337499, 0.36130086738559136,
    0.3619550469618299, 0.3626093813153917, 0.3632638707997185, 0.36391851576876877,
    0.3645733165770197, 0.3652282735794686, 0.36588338713163454, 0.36653865758956017,
    0.3671940853098131, 0.3678496706494878, 0.3685054139662069, 0.3691613156181232,
    0.3698173759639211, 0.3704735953628183, 0.37112997417456756, 0.37178651275945823,
    0.3724432114783181, 0.3731000706925149, 0.373757090763958, 0.3744142720551003,
    0.3750716149289397, 0.3757291197490209, 0.3763867868794371, 0.37704461668483175,
    0.37770260953040014, 0.37836076578189126, 0.37901908580560945, 0.37967756996841623,
    0.38033621863773187, 0.38099503218153724, 0.38165401096837565, 0.38231315536735433,
    0.38297246574814653, 0.3836319424809931, 0.3842915859367041, 0.384951396486661,
    0.38561137450281807, 0.3862715203577044, 0.3869318344244255, 0.3875923170766654,
    0.3882529686886881, 0.3889137896353395, 0.3895747802920495, 0.3902359410348334,
    0.39089727224029397, 0.3915587742856232, 0.39222044754860425, 0.3928822924076131,
    0.3935443092416206, 0.3942064984301942, 0.3948688603534999, 0.395531395392304,
    0.3961941039279751, 0.396856986342486, 0.3975200430184154, 0.39818327433895,
    0.39884668068788626, 0.39951026244963234, 0.40017402000921004, 0.4008379537522568,
    0.4015020640650274, 0.40216635133439615, 0.4028308159478586, 0.40349545829353356,
    0.40416027876016525, 0.40482527773712484, 0.4054904556144128, 0.4061558127826607,
    0.40682134963313316, 0.40748706655772987, 0.4081529639489876, 0.40881904220008214,
    0.40948530170483044, 0.4101517428576924, 0.41081836605377303, 0.4114851716888244,
    0.4121521601592478, 0.41281933186209563, 0.4134866871950734, 0.414154226556542,
    0.4148219503455195, 0.4154898589616834, 0.4161579528053726, 0.4168262322775895,
    0.41749469778000214, 0.4181633497149461, 0.41883218848542686, 0.4195012144951217,
    0.4201704281483818, 0.42083982985023455, 0.4215094200063855, 0.42217919902322065,
    0.4228491673078083, 0.4235193252679015, 0.42418967331193996, 0.4248602118490525,
    0.4255309412890589, 0.42620186204247223, 0.4268729745205011, 0.42754427913505166,
    0.42821577629873003, 0.4288874664248442, 0.4295593499274066, 0.4302314272211359,
    0.43090369872145967, 0.43157616484451633, 0.43224882600715747, 0.4329216826269501,
    0.4335947351221789, 0.43426798391184845, 0.4349414294156856, 0.4356150720541416,
    0.4362889122483946, 0.43696295042035166, 0.4376371869926513, 0.4383116223886657,
    0.43898625703250305, 0.4396610913490098, 0.4403361257637732, 0.4410113607031232,
    0.4416867965941354, 0.442362433864633, 0.4430382729431892, 0.4437143142591297,
    0.4443905582425351, 0.4450670053242431, 0.445743655935851, 0.44642051050971826,
    0.44709756947896867, 0.4477748332774929, 0.4484523023399509, 0.4491299771017745,
    0.4498078579991695, 0.45048594546911847, 0.45116423994938304, 0.4518427418785064,
    0.452521451695816, 0.45320036984142553, 0.453879496756238, 0.4545588328819479,
    0.4552383786610439, 0.45591813453681107, 0.45659810095333386, 0.45727827835549834,
    0.45795866718899475, 0.45863926790032034, 0.45932008093678156, 0.4600011067464969,
    0.4606823457783995, 0.4613637984822395, 0.462045465308587, 0.46272734670883425,
    0.4634094431351988, 0.4640917550407256, 0.46477428287929007, 0.4654570271056005,
    0.46613998817520086, 0.4668231665444734, 0.46750656267064133, 0.46819017701177157,
    0.46887401002677737, 0.4695580621754211, 0.470242333918317, 0.47092682571693373,
    0.47161153803359734, 0.47229647133149394, 0.47298162607467237, 0.4736670027280471,
    0.474352601757401, 0.475038423629388, 0.47572446881153596, 0.4764107377722496,
    0.4770972309808133, 0.4777839489073937, 0.4784708920230427, 0.4791580607997006,
    0.4798454557101983, 0.4805330772282609, 0.48122092582850995, 0.48190900198646686,
    0.4825973061785555, 0.4832858388821052, 0.4839746005753537, 0.48466359173745005,
    0.48535281284845766, 0.48604226438935705, 0.486731946842049, 0.48742186068935756,
    0.48811200641503283, 0.4888023845037542, 0.4894929954411331, 0.4901838397137165,
    0.4908749178089893, 0.4915662302153779, 0.49225777742225296, 0.4929495599199327,
    0.4936415781996858, 0.49433383275373455, 0.495026324075258, 0.49571905265839494,
    0.4964120189982473, 0.4971052235908829, 0.497798666933339, 0.49849234952362526,
    0.4991862718607268, 0.49988043444460767, 0.5005748377762138, 0.5012694823574765,
    0.5019643686913152, 0.5026594972816413, 0.5033548686333608, 0.504050483252378,
    0.5047463416455987, 0.5054424443209333, 0.5061387917873004, 0.5068353845546295,
    0.5075322231338653, 0.50822930803697, 0.5089266397769274, 0.5096242188677459,
    0.510322045824462, 0.5110201211631434, 0.5117184454008931, 0.5124170190558518,
    0.5131158426472023, 0.5138149166951724, 0.5145142417210383, 0.5152138182471284,
    0.5159136467968265, 0.5166137278945754, 0.5173140620658805, 0.518014649837313,
    0.5187154917365139, 0.519416588292197, 0.5201179400341528, 0.5208195474932522,
    0.5215214112014497, 0.5222235316917873, 0.5229259094983979, 0.5236285451565091,
    0.5243314392024468, 0.5250345921736388, 0.5257380046086184, 0.5264416770470284,
    0.5271456100296242, 0.5278498040982783, 0.5285542597959834, 0.5292589776668563,
    0.5299639582561417, 0.5306692021102162, 0.5313747097765916, 0.5320804818039192,
    0.5327865187419931, 0.5334928211417546, 0.5341993895552954, 0.5349062245358622,
    0.5356133266378599, 0.5363206964168558, 0.5370283344295835, 0.537736241233947,
    0.5384444173890242, 0.5391528634550709, 0.5398615799935252, 0.5405705675670115,
    0.5412798267393437, 0.5419893580755301, 0.5426991621417768, 0.5434092395054924,
    0.5441195907352913, 0.5448302164009983, 0.5455411170736526, 0.546252293325512,
    0.5469637457300565, 0.5476754748619931, 0.5483874812972597, 0.5490997656130292,
    0.5498123283877139, 0.5505251702009694, 0.5512382916336991, 0.5519516932680584,
    0.5526653756874588, 0.5533793394765723, 0.5540935852213357, 0.554808113508955,
    0.5555229249279096, 0.5562380200679564, 0.5569533995201349, 0.5576690638767708,
    0.5583850137314809, 0.5591012496791772, 0.5598177723160715, 0.56053458223968,
    0.5612516800488274, 0.5619690663436518, 0.562686741725609, 0.5634047067974767,
    0.5641229621633598, 0.5648415084286944, 0.5655603462002525, 0.5662794760861467,
    0.5669988986958346, 0.567718614640124, 0.5684386245311766, 0.5691589289825135,
    0.5698795286090198, 0.570600424026949, 0.5713216158539278, 0.5720431047089611,
    0.5727648912124365, 0.5734869759861292, 0.574209359653207, 0.5749320428382347,
    0.5756550261671796, 0.5763783102674156, 0.5771018957677287, 0.5778257832983217,
    0.578549973490819, 0.5792744669782719, 0.5799992643951632, 0.5807243663774126,
    0.5814497735623813, 0.5821754865888771, 0.58290150609716, 0.5836278327289465,
    0.5843544671274153, 0.5850814099372122, 0.5858086618044552, 0.5865362233767397,
    0.5872640953031437, 0.5879922782342332, 0.5887207728220669, 0.5894495797202023,
    0.5901786995837001, 0.5909081330691299, 0.5916378808345759, 0.5923679435396415,
    0.5930983218454551, 0.5938290164146754, 0.5945600279114971, 0.5952913570016557,
    0.5960230043524336, 0.5967549706326652, 0.5974872565127427, 0.5982198626646211,
    0.5989527897618244, 0.5996860384794508, 0.6004196094941784, 0.6011535034842709,
    0.6018877211295829, 0.6026222631115662, 0.6033571301132749, 0.6040923228193713,
    0.604827841916132, 0.6055636880914532, 0.6062998620348566, 0.6070363644374954,
    0.6077731959921601, 0.6085103573932842, 0.6092478493369503, 0.609985672520896,
    0.6107238276445196, 0.6114623154088865, 0.6122011365167349, 0.6129402916724819,
    0.6136797815822295, 0.6144196069537706, 0.6151597684965957, 0.6159002669218981,
    0.6166411029425808, 0.6173822772732623, 0.6181237906302831, 0.6188656437317115,
    0.6196078372973505, 0.6203503720487434, 0.6210932487091808, 0.6218364680037065,
    0.6225800306591239, 0.6233239374040026, 0.6240681889686848, 0.6248127860852917,
    0.6255577294877299, 0.6263030199116982, 0.627048658094694, 0.6277946447760197,
    0.6285409806967894, 0.6292876665999361, 0.6300347032302174, 0.6307820913342229,
    0.6315298316603807, 0.6322779249589642, 0.6330263719820988, 0.6337751734837688,
    0.6345243302198242, 0.6352738429479878, 0.6360237124278618, 0.6367739394209349,
    0.6375245246905891, 0.6382754690021071, 0.639026773122679, 0.6397784378214093,
    0.6405304638693244, 0.6412828520393794, 0.6420356031064652, 0.6427887178474162,
    0.6435421970410169, 0.6442960414680096, 0.6450502519111014, 0.645804829154972,
    0.6465597739862802, 0.6473150871936723, 0.6480707695677889, 0.6488268219012725,
    0.6495832449887752, 0.6503400396269658, 0.651097206614538, 0.6518547467522171,
    0.6526126608427687, 0.6533709496910054, 0.6541296141037953, 0.6548886548900692,
    0.6556480728608286, 0.6564078688291535, 0.6571680436102102, 0.6579285980212592,
    0.6586895328816632, 0.659450849012895, 0.6602125472385454, 0.6609746283843315,
    0.6617370932781045, 0.6624999427498579, 0.6632631776317357, 0.6640267987580404,
    0.6647908069652415, 0.6655552030919837, 0.666319987979095, 0.6670851624695951,
    0.6678507274087041, 0.6686166836438503, 0.6693830320246793, 0.670149773403062,
    0.6709169086331035, 0.6716844385711515, 0.6724523640758048, 0.6732206860079223,
    0.6739894052306313, 0.6747585226093366, 0.6755280390117289, 0.676297955307794,
    0.6770682723698215, 0.6778389910724136, 0.6786101122924942, 0.679381636909318,
    0.6801535658044789, 0.6809258998619202, 0.6816986399679426, 0.6824717870112138,
    0.6832453418827782, 0.6840193054760652, 0.6847936786868992, 0.6855684624135089,
    0.6863436575565363, 0.6871192650190462, 0.6878952857065362, 0.6886717205269456,
    0.6894485703906652, 0.690225836210547, 0.6910035189019138, 0.6917816193825688,
    0.6925601385728054, 0.6933390773954172, 0.6941184367757077, 0.6948982176415,
    0.695678420923147, 0.6964590475535415, 0.6972400984681257, 0.698021574604902,
    0.6988034769044427, 0.6995858063099001, 0.7003685637670172, 0.7011517502241374,
    0.7019353666322155, 0.7027194139448274, 0.7035038931181812, 0.704288805111127,
    0.7050741508851682, 0.7058599314044716, 0.7066461476358779, 0.7074328005489129,
    0.708219891115798, 0.709007420311461, 0.709795389113547, 0.7105837985024293,
    0.7113726494612201, 0.7121619429757824, 0.7129516800347397, 0.7137418616294886,
    0.7145324887542088, 0.7153235624058751, 0.7161150835842683, 0.7169070532919868,
    0.7176994725344578, 0.7184923423199489, 0.7192856636595795, 0.7200794375673327,
    0.7208736650600668, 0.7216683471575265, 0.7224634848823555, 0.7232590792601078,
    0.7240551313192597, 0.7248516420912217, 0.7256486126103506, 0.7264460439139616,
    0.7272439370423401, 0.7280422930387543, 0.7288411129494673, 0.7296403978237491,
    0.7304401487138896, 0.7312403666752105, 0.7320410527660781, 0.7328422080479156,
    0.7336438335852158, 0.7344459304455541, 0.7352484996996008, 0.7360515424211345,
    0.7368550596870541, 0.7376590525773928, 0.7384635221753303, 0.7392684695672062,
    0.7400738958425332, 0.7408798020940105, 0.7416861894175365, 0.7424930589122227,
    0.7433004116804071, 0.7441082488276671, 0.7449165714628342, 0.7457253806980063,
    0.7465346776485626, 0.7473444634331765, 0.74815473917383, 0.7489655059958275,
    0.7497767650278094, 0.7505885174017669, 0.7514007642530557, 0.7522135067204101,
    0.7530267459459576, 0.7538404830752332, 0.7546547192571937, 0.7554694556442324,
    0.7562846933921936, 0.7571004336603873, 0.7579166776116038, 0.7587334264121289,
    0.7595506812317586, 0.7603684432438139, 0.7611867136251562, 0.7620054935562023,
    0.7628247842209395, 0.7636445868069411, 0.7644649025053819, 0.7652857325110534,
    0.7661070780223793, 0.7669289402414317, 0.767751320373946, 0.7685742196293376,
    0.7693976392207169, 0.7702215803649061, 0.7710460442824545, 0.7718710321976554,
    0.7726965453385619, 0.7735225849370031, 0.774349152228601, 0.7751762484527865,
    0.7760038748528164, 0.7768320326757897, 0.7776607231726648, 0.7784899475982758,
    0.7793197072113504, 0.7801500032745257, 0.7809808370543664, 0.7818122098213816,
    0.782644122850042, 0.7834765774187976, 0.7843095748100951, 0.7851431163103955,
    0.7859772032101917, 0.7868118368040268, 0.7876470183905114, 0.788482749272342,
    0.7893190307563187, 0.7901558641533641, 0.790993250778541, 0.7918311919510709,
    0.7926696889943526, 0.7935087432359812, 0.7943483560077661, 0.7951885286457503,
    0.7960292624902291, 0.7968705588857693, 0.7977124191812284, 0.7985548447297734,
    0.799397836888901, 0.8002413970204559, 0.8010855264906516, 0.8019302266700888,
    0.8027754989337768, 0.8036213446611515, 0.8044677652360972, 0.8053147620469655,
    0.8061623364865961, 0.8070104899523369, 0.8078592238460648, 0.808708539574206,
    0.8095584385477568, 0.8104089221823043, 0.8112599918980478, 0.812111649119819,
    0.8129638952771043, 0.8138167318040651, 0.8146701601395597, 0.8155241817271649,
    0.8163787980151973, 0.8172340104567356, 0.8180898205096421, 0.8189462296365849,
    0.8198032393050603, 0.8206608509874145, 0.8215190661608667, 0.8223778863075313,
    0.8232373129144406, 0.8240973474735677, 0.8249579914818493, 0.8258192464412093,
    0.8266811138585811, 0.8275435952459319, 0.8284066921202856, 0.8292704060037467,
    0.8301347384235239, 0.8309996909119541, 0.8318652650065265, 0.8327314622499065,
    0.8335982841899605, 0.8344657323797801, 0.8353338083777064, 0.8362025137473557,
    0.8370718500576432, 0.8379418188828089, 0.8388124218024428, 0.8396836604015094,
    0.8405555362703745, 0.8414280510048296, 0.8423012062061188, 0.8431750034809637,
    0.8440494444415906, 0.8449245307057557, 0.8458002638967723, 0.8466766456435372,
    0.8475536775805571, 0.848431361347976, 0.8493096985916022, 0.8501886909629349,
    0.8510683401191925, 0.8519486477233396, 0.8528296154441146, 0.8537112449560583,
    0.8545935379395412, 0.855476496080792, 0.8563601210719262, 0.8572444146109743,
    0.8581293784019111, 0.8590150141546838, 0.8599013235852422, 0.8607883084155666,
    0.8616759703736987, 0.8625643111937701, 0.8634533326160327, 0.8643430363868887,
    0.8652334242589204, 0.8661244979909208, 0.8670162593479246, 0.867908710101238,
    0.8688018520284706, 0.8696956869135657, 0.8705902165468321, 0.8714854427249756,
    0.8723813672511307, 0.8732779919348922, 0.8741753185923476, 0.8750733490461096,
    0.8759720851253479, 0.8768715286658225, 0.8777716815099167, 0.8786725455066697,
    0.8795741225118103, 0.8804764143877905, 0.8813794230038187, 0.8822831502358943,
    0.8831875979668418, 0.8840927680863445, 0.8849986624909801, 0.885905283084255,
    0.8868126317766389, 0.8877207104856012, 0.8886295211356454, 0.8895390656583454,
    0.8904493459923813, 0.8913603640835757, 0.8922721218849297, 0.89318462135666,
    0.8940978644662357, 0.8950118531884151, 0.8959265895052835, 0.8968420754062901,
    0.8977583128882868, 0.8986753039555654, 0.8995930506198964, 0.9005115549005672,
    0.9014308188244216, 0.9023508444258979, 0.903271633747069, 0.9041931888376816,
    0.9051155117551963, 0.9060386045648274, 0.9069624693395835, 0.9078871081603077,
    0.9088125231157191, 0.9097387163024536, 0.9106656898251053, 0.9115934457962682,
    0.9125219863365783, 0.9134513135747557, 0.9143814296476472, 0.9153123367002692,
    0.9162440368858507, 0.9171765323658763, 0.9181098253101306, 0.9190439178967418,
    0.9199788123122254, 0.9209145107515299, 0.9218510154180802, 0.9227883285238243,
    0.9237264522892774, 0.9246653889435684, 0.9256051407244857, 0.9265457098785236,
    0.9274870986609287, 0.9284293093357473, 0.9293723441758726, 0.930316205463092,
    0.9312608954881356, 0.9322064165507239, 0.9331527709596166, 0.9340999610326616,
    0.9350479890968441, 0.9359968574883364, 0.9369465685525478, 0.9378971246441744,
    0.9388485281272505, 0.9398007813751988, 0.9407538867708823, 0.9417078467066555,
    0.9426626635844167, 0.9436183398156603, 0.9445748778215294, 0.945532280032869,
    0.9464905488902797, 0.9474496868441712, 0.9484096963548164, 0.9493705798924065,
    0.9503323399371053, 0.9512949789791053, 0.9522584995186828, 0.9532229040662543,
    0.954188195142433, 0.9551543752780857, 0.9561214470143898, 0.9570894129028917,
    0.9580582755055643, 0.9590280373948659, 0.9599987011537987, 0.9609702693759686,
    0.9619427446656449, 0.9629161296378203, 0.9638904269182715, 0.9648656391436208,
    0.9658417689613966, 0.9668188190300965, 0.9677967920192487, 0.9687756906094754,
    0.9697555174925558, 0.97073627537149, 0.9717179669605628, 0.9727005949854088,
    0.9736841621830775, 0.9746686713020984, 0.9756541251025476, 0.9766405263561138,
    0.9776278778461658, 0.9786161823678198, 0.9796054427280072, 0.9805956617455434,
    0.9815868422511965, 0.9825789870877571, 0.983572099110108, 0.9845661811852948,
    0.985561236192597, 0.9865572670235992, 0.9875542765822639, 0.9885522677850034,
    0.9895512435607531, 0.9905512068510454, 0.9915521606100838, 0.9925541078048175,
    0.993557051415017, 0.99456099443335, 0.9955659398654573, 0.9965718907300306,
    0.9975788500588897, 0.9985868208970605, 0.9995958063028542, 1.0006058093479462,
    1.0016168331174566, 1.0026288807100303, 1.003641955237918, 1.0046560598270589,
    1.0056711976171615, 1.0066873717617886, 1.0077045854284392, 1.0087228417986338,
    1.0097421440679988, 1.0107624954463525, 1.011783899157791, 1.0128063584407752,
    1.0138298765482183, 1.0148544567475741, 1.0158801023209258, 1.0169068165650756,
    1.017934602791635, 1.0189634643271155, 1.019993404513021, 1.0210244267059394,
    1.022056534277636, 1.0230897306151474, 1.0241240191208758, 1.0251594032126845,
    1.026195886323994, 1.0272334719038783, 1.028272163417163, 1.0293119643445237,
    1.0303528781825841, 1.031394908444017, 1.0324380586576443, 1.0334823323685385,
    1.034527733138125, 1.0355742645442856, 1.036621930181461, 1.0376707336607573,
    1.0387206786100502, 1.0397717686740922, 1.0408240075146187, 1.0418773988104573,
    1.042931946257636, 1.0439876535694934, 1.045044524476789, 1.046102562727815,
    1.0471617720885094, 1.0482221563425678, 1.049283719291559, 1.0503464647550402,
    1.0514103965706727, 1.052475518594339, 1.0535418347002614, 1.0546093487811206,
    1.0556780647481754, 1.0567479865313845, 1.057819118079528, 1.0588914633603304,
    1.0599650263605847, 1.061039811086277, 1.0621158215627133, 1.0631930618346461,
    1.0642715359664023, 1.0653512480420133, 1.066432202165344, 1.0675144024602254,
    1.0685978530705864, 1.0696825581605875, 1.0707685219147554, 1.0718557485381186,
    1.0729442422563453, 1.0740340073158805, 1.0751250479840855, 1.0762173685493783,
    1.077310973321376, 1.0784058666310365, 1.0795020528308035, 1.0805995362947507,
    1.0816983214187295, 1.0827984126205157, 1.0838998143399596, 1.0850025310391354,
    1.0861065672024928, 1.0872119273370107, 1.0883186159723506, 1.0894266376610124,
    1.0905359969784916, 1.0916466985234365, 1.0927587469178093, 1.0938721468070456,
    1.094986902860218, 1.0961030197701989, 1.0972205022538268, 1.0983393550520721,
    1.0994595829302054, 1.1005811906779674, 1.1017041831097398, 1.102828565064718,
    1.1039543414070854, 1.1050815170261885, 1.1062100968367148, 1.107340085778871,
    1.108471488818564, 1.1096043109475826, 1.110738557183781, 1.111874232571264,
    1.1130113421805747, 1.114149891108882, 1.1152898844801715, 1.1164313274454376,
    1.1175742251828769, 1.1187185828980837, 1.1198644058242477, 1.1210116992223529,
    1.122160468381378, 1.1233107186184994, 1.124462455279296, 1.125615683737955,
    1.126770409397481, 1.1279266376899058, 1.1290843740764998, 1.1302436240479876,
    1.1314043931247628, 1.1325666868571067, 1.1337305108254083, 1.1348958706403862,
    1.1360627719433132, 1.1372312204062418, 1.138401221732234, 1.1395727816555898,
    1.1407459059420821, 1.14192060038919, 1.1430968708263365, 1.1442747231151276,
    1.1454541631495943, 1.1466351968564357, 1.147817830195266, 1.1490020691588623,
    1.1501879197734162, 1.1513753880987865, 1.152564480228755, 1.1537552022912845,
    1.15494756044878, 1.156141560898351, 1.1573372098720778, 1.1585345136372793,
    1.1597334784967843, 1.1609341107892042, 1.1621364168892094, 1.1633404032078085,
    1.164546076192629, 1.1657534423282019, 1.1669625081362491, 1.1681732801759728,
    1.1693857650443475, 1.170599969376417, 1.1718158998455919, 1.1730335631639508,
    1.1742529660825456, 1.1754741153917083, 1.1766970179213614, 1.1779216805413317,
    1.1791481101616672, 1.1803763137329562, 1.181606298246651, 1.1828380707353945,
    1.1840716382733487, 1.1853070079765287, 1.1865441870031384, 1.1877831825539105,
    1.1890240018724494, 1.190266652245578, 1.1915111410036878, 1.1927574755210923,
    1.1940056632163851, 1.1952557115528002, 1.1965076280385771, 1.1977614202273292,
    1.1990170957184163, 1.2002746621573204, 1.201534127236026, 1.202795498693404,
    1.2040587843155992, 1.2053239919364236, 1.2065911294377512, 1.2078602047499187,
    1.2091312258521307, 1.2104042007728677, 1.2116791375902987, 1.2129560444326999,
    1.2142349294788755, 1.2155158009585845, 1.2167986671529716, 1.218083536395002,
    1.2193704170699022, 1.2206593176156049, 1.2219502465231975, 1.223243212337378,
    1.224538223656913, 1.2258352891351025, 1.22713441748025, 1.2284356174561355,
    1.2297388978824955, 1.2310442676355084, 1.232351735648284, 1.233661310911359,
    1.2349730024731977, 1.236286819440699, 1.2376027709797077, 1.2389208663155324,
    1.2402411147334689, 1.2415635255793291, 1.2428881082599768, 1.2442148722438673,
    1.2455438270615957, 1.2468749823064496, 1.2482083476349684, 1.2495439327675093,
    1.2508817474888192, 1.2522218016486129, 1.2535641051621584, 1.2549086680108692,
    1.256255500242902, 1.2576046119737616, 1.2589560133869147, 1.2603097147344073,
    1.2616657263374926, 1.2630240585872632, 1.2643847219452928, 1.2657477269442845,
    1.2671130841887261, 1.2684808043555538, 1.2698508981948233, 1.2712233765303889,
    1.2725982502605901, 1.2739755303589475, 1.2753552278748648, 1.276737353934341,
    1.27812191974069, 1.2795089365752692, 1.2808984157982168, 1.2822903688491971,
    1.2836848072481555, 1.2850817425960825, 1.2864811865757866, 1.287883150952676,
    1.2892876475755513, 1.2906946883774058, 1.292104285376237, 1.2935164506758674,
    1.294931196466775, 1.2963485350269341, 1.297768478722668, 1.2991910400095086,
    1.30061623143307, 1.3020440656299315, 1.3034745553285307, 1.3049077133500697,
    1.3063435526094305, 1.3077820861161034, 1.3092233269751254, 1.3106672883880326,
    1.3121139836538216, 1.3135634261699258, 1.3150156294332027, 1.316470607040933,
    1.3179283726918343, 1.3193889401870853, 1.3208523234313658, 1.3223185364339076,
    1.32378759330956, 1.3252595082798688, 1.3267342956741692, 1.3282119699306927,
    1.329692545597689, 1.3311760373345611, 1.3326624599130172, 1.3341518282182352,
    1.335644157250044, 1.3371394621241206, 1.3386377580732023, 1.3401390604483143,
    1.3416433847200149, 1.343150746479656, 1.3446611614406612, 1.346174645439821,
    1.3476912144386044, 1.3492108845244892, 1.3507336719123093, 1.352259592945621,
    1.3537886640980865, 1.3553209019748786, 1.3568563233141013, 1.3583949449882324,
    1.3599367840055847, 1.3614818575117869, 1.363030182791286, 1.36458177726887,
    1.36613665851121, 1.3676948442284274, 1.3692563522756784, 1.3708212006547649,
    1.3723894075157643, 1.373960991158685, 1.375535970035143, 1.3771143627500644,
    1.3786961880634094, 1.380281464891923, 1.38187021231091, 1.3834624495560337,
    1.3850581960251438, 1.3866574712801272, 1.388260295048787, 1.3898666872267487,
    1.3914766678793937, 1.393090257243821, 1.3947074757308378, 1.396328343926978,
    1.3979528825965524, 1.3995811126837268, 1.4012130553146325, 1.402848731799507,
    1.4044881636348676, 1.4061313725057154, 1.4077783802877744, 1.4094292090497627,
    1.4110838810556985, 1.4127424187672408, 1.4144048448460653, 1.416071182156276,
    1.4177414537668542, 1.419415682954145, 1.421093893204381, 1.4227761082162451,
    1.424462351903473, 1.4261526483974958, 1.4278470220501243, 1.4295454974362731,
    1.4312480993567296, 1.4329548528409644, 1.434665783149987, 1.4363809157792464,
    1.4381002764615767, 1.4398238911701904, 1.4415517861217189, 1.4432839877793011,
    1.445020522855723, 1.4467614183166049, 1.4485067013836437, 1.4502563995379043,
    1.4520105405231662, 1.4537691523493244, 1.4555322632958447, 1.457299901915278,
    1.4590720970368296, 1.4608488777699897, 1.4626302735082224, 1.4644163139327167,
    1.4662070290162004, 1.4680024490268169, 1.4698026045320676, 1.4716075264028208,
    1.4734172458173882, 1.4752317942656699, 1.4770512035533712, 1.4788755058062908,
    1.4807047334746817, 1.4825389193376886, 1.4843780965078606, 1.486222298435743,
    1.4880715589145481, 1.4899259120849082, 1.491785392439711, 1.493650034829021,
    1.4955198744650864, 1.4973949469274364, 1.4992752881680662, 1.501160934516718,
    1.5030519226862533, 1.5049482897781234, 1.5068500732879382, 1.5087573111111354,
    1.510670041548753, 1.512588303313307, 1.5145121355347757, 1.5164415777666955,
    1.5183766699923675, 1.52031745263118, 1.522263966545048, 1.5242162530449719,
    1.5261743538977213, 1.5281383113326412, 1.5301081680485893, 1.5320839672210027,
    1.5340657525091004, 1.5360535680632212, 1.538047458532305, 1.540047469071515,
    1.5420536453500087, 1.5440660335588599, 1.546084680419133, 1.5481096331901167,
    1.5501409396777186, 1.5521786482430249, 1.5542228078110296, 1.5562734678795371,
    1.5583306785282418, 1.5603944904279898, 1.5624649548502267, 1.564542123676636,
    1.5666260494089723, 1.5687167851790962, 1.5708143847592118, 1.5729189025723158,
    1.5750303937028625, 1.5771489139076476, 1.5792745196269196, 1.5814072679957225,
    1.5835472168554765, 1.5856944247658022, 1.587848951016595, 1.5900108556403552,
    1.592180199424782, 1.5943570439256363, 1.596541451479881, 1.5987334852191046,
    1.6009332090832362, 1.6031406878345593, 1.6053559870720333, 1.6075791732459288,
    1.6098103136727873, 1.6120494765507118, 1.6142967309749998, 1.6165521469541242,
    1.6188157954260765, 1.6210877482750767, 1.623368078348665, 1.6256568594751817,
    1.6279541664816484, 1.6302600752120617, 1.6325746625461088, 1.634898006418319,
    1.637230185837662, 1.6395712809076082, 1.641921372846658, 1.644280544009362,
    1.6466488779078392, 1.6490264592338104, 1.6514133738811625, 1.6538097089690567,
    1.6562155528655984, 1.6586309952120861, 1.6610561269478523, 1.66349104033572,
    1.6659358289880866, 1.668390587893661, 1.6708554134448663, 1.6733304034659353,
    1.6758156572417133, 1.6783112755471958, 1.6808173606778194, 1.683334016480531,
    1.6858613483856595, 1.6883994634396151, 1.6909484703384414, 1.6935084794622481,
    1.6960796029105523, 1.6986619545385557, 1.7012556499943918, 1.703860806757369,
    1.7064775441772462, 1.7091059835145723, 1.7117462479821268, 1.7143984627874944,
    1.7170627551768145, 1.7197392544797432, 1.7224280921556683, 1.7251294018412209,
    1.727843319399127, 1.730569982968443, 1.7333095330162274, 1.7360621123906912,
    1.7388278663758867, 1.7416069427479814, 1.7443994918331764, 1.747205666567327,
    1.7500256225573254, 1.7528595181443087, 1.7557075144687593, 1.7585697755375636,
    1.7614464682931033, 1.7643377626844527, 1.7672438317407584, 1.7701648516468846,
    1.7731010018214086, 1.7760524649970526, 1.7790194273036475, 1.7820020783537218,
    1.7850006113308192, 1.7880152230806483, 1.7910461142051755, 1.794093489159776,
    1.7971575563535627, 1.8002385282530204, 1.8033366214890767, 1.8064520569677456,
    1.8095850599844927, 1.81273586034247, 1.8159046924747795, 1.8190917955709347,
    1.822297413707691, 1.825521795984431, 1.8287651966632945, 1.832027875314258,
    1.8353100969653717, 1.838612132258379, 1.8419342576099524, 1.8452767553787903,
    1.8486399140388332, 1.8520240283588727, 1.855429399588837, 1.858856335653056,
    1.8623051513508229, 1.8657761685645835, 1.869269716476111, 1.872786131791032,
    1.8763257589720983, 1.8798889504816167, 1.8834760670334745, 1.8870874778552187,
    1.8907235609606787, 1.8943847034336456, 1.8980713017231519, 1.9017837619509286,
    1.9055225002316492, 1.9092879430066036, 1.9130805273914897, 1.9169007015390442,
    1.9207489250172836, 1.9246256692041694, 1.9285314176995658, 1.9324666667554071,
    1.9364319257250546, 1.9404277175328821, 1.9444545791651948, 1.94851306218366,
    1.952603733262504, 1.9567271747508097, 1.9608839852613424, 1.965074780287422,
    1.9693001928494662, 1.9735608741729396, 1.9778574943995604, 1.9821907433337507,
    1.9865613312264505, 1.990969989598571, 1.995417472106523, 1.999904555452435,
    2.0044320403418676, 2.0090007524920357, 2.013611543693781, 2.0182652929307796,
    2.0229629075597333, 2.0277053245555954, 2.0324935118261824, 2.037328469600884,
    2.042211231898547, 2.047142868080035, 2.052124484491403, 2.057157226204131,
    2.0622422788593937, 2.0673808706239405, 2.072574274265816, 2.0778238093588595,
    2.08313084462572, 2.088496800429993, 2.093923151429039, 2.0994114294001163,
    2.10496322625363, 2.110580197248595, 2.1162640644268684, 2.1220166202843003,
    2.1278397316987387, 2.1337353441368148, 2.1397054861636517, 2.1457522742821196,
    2.1518779181310292, 2.158084726074776, 2.164375111220427, 2.1707515979021803,
    2.17721682867755, 2.183773571884618, 2.1904247298153576, 2.1971733475664283,
    2.2040226226361104, 2.21097591534432, 2.2180367601620805, 2.225208878047596,
    2.2324961898984093, 2.2399028312433127, 2.2474331683139597, 2.25509181565495,
    2.2628836554529124, 2.2708138587903415, 2.278887909059291, 2.2871116278042685,
    2.2954912033037203, 2.3040332222465256, 2.312744704915268, 2.321633144353487,
    2.3307065500716884, 2.339973496939229, 2.3494431800195534, 2.3591254762386287,
    2.369031013935953, 2.379171251540579, 2.389558566849346, 2.400206358671385,
    2.4111291629553055, 2.4223427859506352, 2.4338644574955373, 2.4457130081982417,
    2.4579090751289905, 2.47047534171476, 2.483436818900532, 2.4968211764033637,
    2.5106591351688654, 2.524984935123622, 2.5398368962528397, 2.5552580962754603,
    2.5712971952482255, 2.5880094470447057, 2.6054579509135656, 2.623715214850718,
    2.6428651288002922, 2.6630054835700414, 2.6842512268818055, 2.7067387309977775,
    2.7306314731395935, 2.7561277281451653, 2.7834711910692786, 2.8129659738719495,
    2.844998321092705, 2.880068991537923, 2.9188432333680163, 2.962231123297717,
    3.0115232354688457, 3.068634053518903, 3.136573372238863, 3.2204547572338598,
    3.329965415413892, 3.48672170312977,
];

/// Density upper bound of each stripe.
pub static YU: [f64; 4001] = [
    0.05400127353770576, 0.0544874991401306, 0.05497266139100963, 0.055456769228976285,
    0.05593983142644275, 0.056421856594252175, 0.056902853186158175, 0.05738282950313992,
    0.05786179369756015, 0.05833975377717306, 0.05881671760898901, 0.05929269292300222,
    0.059767687315787396, 0.06024170825397137, 0.060714763077584596, 0.061186859003298046,
    0.06165800312755034, 0.06212820242956947, 0.06259746377429368, 0.06306579391519596,
    0.06353319949701536, 0.06399968705839981, 0.06446526303446333, 0.06492993375926144,
    0.06539370546818786, 0.06585658430029559, 0.06631857630054563, 0.06677968742198559,
    0.06723992352786133, 0.06769929039366424, 0.06815779370911615, 0.06861543908009471,
    0.0690722320305012, 0.06952817800407285, 0.06998328236614207, 0.07043755040534405,
    0.07089098733527502, 0.07134359829610258, 0.07179538835613027, 0.07224636251331755,
    0.07269652569675696, 0.07314588276811007, 0.07359443852300343, 0.07404219769238614,
    0.07448916494385005, 0.07493534488291423, 0.07538074205427464, 0.07582536094302027,
    0.07626920597581682, 0.07671228152205918, 0.07715459189499341, 0.07759614135280957,
    0.07803693409970615, 0.07847697428692695, 0.0789162660137715, 0.07935481332857972,
    0.07979262022969179, 0.08022969066638364, 0.08066602853977929, 0.08110163770374065,
    0.08153652196573505, 0.08197068508768172, 0.08240413078677776, 0.0828368627363038,
    0.0832688845664107, 0.08370019986488697, 0.08413081217790835, 0.08456072501076946,
    0.08498994182859837, 0.08541846605705442, 0.08584630108300985, 0.0862734502552158,
    0.08669991688495302, 0.08712570424666745, 0.08755081557859194, 0.08797525408335348,
    0.088399022928567, 0.08882212524741596, 0.08924456413922004, 0.08966634266999027,
    0.09008746387297212, 0.09050793074917664, 0.0909277462679002, 0.09134691336723286,
    0.09176543495455598, 0.09218331390702925, 0.09260055307206727, 0.09301715526780613,
    0.0934331232835603, 0.09384845988026971, 0.09426316779093803, 0.09467724972106129,
    0.09509070834904836, 0.0955035463266321, 0.09591576627927298, 0.09632737080655375,
    0.09673836248256677, 0.09714874385629328, 0.09755851745197504, 0.09796768576947903,
    0.09837625128465452, 0.09878421644968327, 0.09919158369342301, 0.09959835542174415,
    0.10000453401786, 0.10041012184265065, 0.10081512123498054, 0.10121953451201039,
    0.10162336396950249, 0.10202661188212098, 0.1024292805037261, 0.10283137206766294,
    0.10323288878704495, 0.10363383285503222, 0.10403420644510444, 0.10443401171132913,
    0.10483325078862467, 0.10523192579301886, 0.10563003882190264, 0.10602759195427919,
    0.1064245872510087, 0.10682102675504883, 0.10721691249169055, 0.10761224646879032,
    0.10800703067699766, 0.1084012670899793, 0.10879495766463892, 0.10918810434133336,
    0.10958070904408497, 0.10997277368079042, 0.11036430014342578, 0.11075529030824828,
    0.1111457460359945, 0.11153566917207525, 0.1119250615467673, 0.11231392497540162,
    0.11270226125854879, 0.11309007218220107, 0.11347735951795163, 0.11386412502317077,
    0.11425037044117915, 0.11463609750141848, 0.11502130791961904, 0.11540600339796468,
    0.11579018562525537, 0.11617385627706674, 0.11655701701590732, 0.11693966949137317,
    0.11732181534030013, 0.11770345618691369, 0.11808459364297627, 0.11846522930793257,
    0.11884536476905215, 0.11922500160157043, 0.11960414136882684, 0.1199827856224014,
    0.12036093590224878, 0.1207385937368305, 0.12111576064324532, 0.121492438127357,
    0.12186862768392086, 0.12224433079670817, 0.12261954893862834, 0.12299428357184974,
    0.12336853614791864, 0.12374230810787602, 0.12411560088237314, 0.12448841589178515,
    0.12486075454632295, 0.1252326182461437, 0.12560400838145938, 0.1259749263326441,
    0.12634537347033967, 0.12671535115555957, 0.1270848607397916, 0.1274539035650992,
    0.12782248096422075, 0.1281905942606682, 0.12855824476882372, 0.1289254337940353,
    0.12929216263271084, 0.1296584325724112, 0.1300242448919414, 0.13038960086144138,
    0.1307545017424745, 0.1311189487881158, 0.1314829432430385, 0.13184648634359905,
    0.13220957931792185, 0.13257222338598212, 0.1329344197596879, 0.13329616964296093,
    0.13365747423181634, 0.13401833471444163, 0.1343787522712739, 0.13473872807507684,
    0.1350982632910162, 0.13545735907673428, 0.13581601658242376, 0.13617423695090017,
    0.13653202131767364, 0.1368893708110198, 0.13724628655204935, 0.13760276965477722,
    0.13795882122619055, 0.1383144423663158, 0.13866963416828515, 0.1390243977184019,
    0.13937873409620502, 0.13973264437453306, 0.14008612961958716, 0.14043919089099313,
    0.14079182924186298, 0.14114404571885542, 0.1414958413622359, 0.14184721720593563,
    0.14219817427760995, 0.14254871359869617, 0.1428988361844704, 0.1432485430441039,
    0.14359783518071847, 0.1439467135914416, 0.1442951792674605, 0.14464323319407565,
    0.14499087635075403, 0.14533810971118083, 0.14568493424331164, 0.14603135090942307,
    0.14637736066616355, 0.1467229644646028, 0.14706816325028127, 0.14741295796325846,
    0.14775734953816141, 0.148101338904232, 0.1484449269853737, 0.14878811470019826,
    0.14913090296207135, 0.14947329267915793, 0.14981528475446704, 0.15015688008589606,
    0.15049807956627442, 0.15083888408340695, 0.1511792945201165, 0.15151931175428626,
    0.15185893665890163, 0.15219817010209133, 0.15253701294716848, 0.1528754660526707,
    0.15321353027240014, 0.1535512064554632, 0.15388849544630911, 0.15422539808476887,
    0.1545619152060932, 0.1548980476409904, 0.15523379621566366, 0.1555691617518479,
    0.15590414506684627, 0.1562387469735663, 0.15657296828055567, 0.15690680979203725,
    0.15724027230794432, 0.15757335662395502, 0.15790606353152647, 0.15823839381792856,
    0.1585703482662775, 0.15890192765556885, 0.15923313276071013, 0.1595639643525534,
    0.15989442319792713, 0.16022451005966798, 0.16055422569665198, 0.16088357086382585,
    0.1612125463122375, 0.16154115278906628, 0.16186939103765338, 0.16219726179753127,
    0.16252476580445324, 0.1628519037904225, 0.16317867648372106, 0.16350508460893812,
    0.16383112888699847, 0.16415681003519028, 0.16448212876719281, 0.1648070857931038,
    0.1651316818194664, 0.16545591754929637, 0.16577979368210818, 0.16610331091394143,
    0.16642646993738694, 0.16674927144161242, 0.16707171611238802, 0.16739380463211145,
    0.1677155376798331, 0.16803691593128053, 0.1683579400588832, 0.16867861073179655,
    0.1689989286159261, 0.1693188943739512, 0.1696385086653484, 0.169957772146415,
    0.17027668547029182, 0.17059524928698638, 0.1709134642433952, 0.17123133098332646,
    0.17154885014752194, 0.17186602237367912, 0.17218284829647304, 0.1724993285475776,
    0.17281546375568715, 0.17313125454653738, 0.17344670154292635, 0.17376180536473537,
    0.17407656662894927, 0.174390985949677, 0.17470506393817153, 0.17501880120285004,
    0.17533219834931346, 0.17564525598036632, 0.17595797469603588, 0.17627035509359143,
    0.17658239776756351, 0.17689410330976255, 0.1772054723092976, 0.17751650535259492,
    0.17782720302341626, 0.17813756590287705, 0.17844759456946457, 0.17875728959905526,
    0.17906665156493315, 0.17937568103780674, 0.1796843785858267, 0.179992744774603,
    0.1803007801672219, 0.18060848532426282, 0.18091586080381525, 0.18122290716149508,
    0.1815296249504612, 0.18183601472143177, 0.18214207702270033, 0.18244781240015187,
    0.18275322139727854, 0.18305830455519553, 0.1833630624126565, 0.1836674955060692,
    0.18397160436951057, 0.1842753895347421, 0.1845788515312246, 0.1848819908861334,
    0.185184808124373, 0.1854873037685917, 0.18578947833919607, 0.1860913323543654,
    0.186392866330066, 0.1866940807800653, 0.1869949762159458, 0.1872955531471191,
    0.18759581208083967, 0.18789575352221835, 0.1881953779742361, 0.1884946859377573,
    0.18879367791154308, 0.18909235439226468, 0.18939071587451617, 0.18968876285082786,
    0.18998649581167887, 0.19028391524551008, 0.1905810216387367, 0.1908778154757607,
    0.19117429723898346, 0.19147046740881812, 0.19176632646370156, 0.19206187488010684,
    0.19235711313255488, 0.1926520416936268, 0.19294666103397556, 0.19324097162233755,
    0.1935349739255445, 0.19382866840853494, 0.19412205553436554, 0.19441513576422248,
    0.194707909557433, 0.19500037737147613, 0.19529253966199425, 0.1955843968828036,
    0.1958759494859056, 0.19616719792149728, 0.1964581426379825, 0.19674878408198204,
    0.1970391226983446, 0.197329158930157, 0.19761889321875478, 0.19790832600373237,
    0.19819745772295325, 0.1984862888125603, 0.19877481970698568, 0.19906305083896095,
    0.19935098263952683, 0.1996386155380431, 0.19992594996219853, 0.2002129863380202,
    0.20049972508988323, 0.20078616664052062, 0.20107231141103227, 0.2013581598208944,
    0.20164371228796912, 0.2019289692285135, 0.20221393105718866, 0.20249859818706897,
    0.2027829710296511, 0.20306704999486277, 0.20335083549107189, 0.2036343279250951,
    0.20391752770220684, 0.20420043522614764, 0.2044830508991331, 0.20476537512186224,
    0.20504740829352597, 0.20532915081181555, 0.20561060307293103, 0.2058917654715893,
    0.20617263840103264, 0.20645322225303667, 0.2067335174179185, 0.2070135242845448,
    0.2072932432403397, 0.20757267467129284, 0.2078518189619673, 0.20813067649550696,
    0.208409247653645, 0.20868753281671085, 0.20896553236363827, 0.20924324667197278,
    0.2095206761178793, 0.20979782107614936, 0.2100746819202089, 0.21035125902212523,
    0.2106275527526146, 0.21090356348104944, 0.2111792915754653, 0.21145473740256845,
    0.21172990132774253, 0.21200478371505582, 0.21227938492726825, 0.21255370532583834,
    0.21282774527092985, 0.213101505121419, 0.21337498523490103, 0.21364818596769702,
    0.21392110767486053, 0.2141937507101844, 0.214466115426207, 0.21473820217421932,
    0.21501001130427108, 0.2152815431651772, 0.21555279810452452, 0.2158237764686778,
    0.21609447860278638, 0.2163649048507903, 0.21663505555542642, 0.2169049310582348,
    0.21717453169956488, 0.21744385781858142, 0.21771290975327076, 0.21798168784044666,
    0.21825019241575636, 0.2185184238136866, 0.21878638236756945, 0.21905406840958808,
    0.21932148227078277, 0.21958862428105655, 0.21985549476918104, 0.220122094062802,
    0.22038842248844517, 0.22065448037152174, 0.22092026803633413, 0.22118578580608123,
    0.22145103400286428, 0.2217160129476921, 0.2219807229604866, 0.22224516436008795,
    0.22250933746426046, 0.2227732425896975, 0.2230368800520268, 0.22330025016581576,
    0.22356335324457688, 0.22382618960077275, 0.22408875954582105, 0.22435106339010005,
    0.2246131014429533, 0.22487487401269493, 0.22513638140661463, 0.22539762393098256,
    0.22565860189105427, 0.22591931559107573, 0.22617976533428824, 0.2264399514229331,
    0.22669987415825651, 0.2269595338405145, 0.22721893076897748, 0.22747806524193503,
    0.22773693755670077, 0.2279955480096166, 0.2282538968960579, 0.22851198451043767,
    0.22876981114621137, 0.22902737709588128, 0.22928468265100116, 0.2295417281021807,
    0.22979851373908994, 0.23005503985046366, 0.23031130672410596, 0.23056731464689445,
    0.23082306390478463, 0.23107855478281425, 0.23133378756510756, 0.23158876253487976,
    0.2318434799744409, 0.2320979401652003, 0.23235214338767068, 0.2326060899214723,
    0.2328597800453372, 0.23311321403711316, 0.2333663921737678, 0.23361931473139289,
    0.2338719819852078, 0.23412439420956413, 0.2343765516779492, 0.2346284546629905,
    0.23488010343645904, 0.23513149826927365, 0.23538263943150475, 0.2356335271923783,
    0.23588416182027933, 0.2361345435827561, 0.23638467274652367, 0.2366345495774678,
    0.23688417434064848, 0.23713354730030384, 0.2373826687198538, 0.23763153886190366,
    0.2378801579882479, 0.2381285263598736, 0.23837664423696422, 0.23862451187890293,
    0.23887212954427656, 0.2391194974908787, 0.2393666159757138, 0.23961348525499984,
    0.2398601055841726, 0.2401064772178886, 0.24035260041002882, 0.24059847541370177,
    0.24084410248124738, 0.24108948186423998, 0.2413346138134917, 0.2415794985790559,
    0.2418241364102305, 0.24206852755556116, 0.24231267226284464, 0.24255657077913204,
    0.24280022335073187, 0.2430436302232135, 0.2432867916414103, 0.24352970784942268,
    0.24377237909062136, 0.24401480560765043, 0.2442569876424307, 0.24449892543616242,
    0.2447406192293287, 0.24498206926169833, 0.245223275772329, 0.24546423899957034,
    0.24570495918106675, 0.24594543655376047, 0.24618567135389474, 0.2464256638170165,
    0.24666541417797946, 0.24690492267094702, 0.24714418952939515, 0.24738321498611537,
    0.24762199927321743, 0.24786054262213233, 0.24809884526361525, 0.24833690742774805,
    0.24857472934394248, 0.2488123112409426, 0.24904965334682785, 0.24928675588901564,
    0.24952361909426413, 0.249760243188675, 0.24999662839769632, 0.2502327749461247,
    0.2504686830581087, 0.25070435295715104, 0.2509397848661113, 0.2511749790072087,
    0.25140993560202457, 0.2516446548715051, 0.251879137035964, 0.25211338231508473,
    0.25234739092792347, 0.2525811630929113, 0.25281469902785714, 0.25304799894995006,
    0.2532810630757616, 0.25351389162124865, 0.25374648480175566, 0.25397884283201727,
    0.2542109659261606, 0.25444285429770785, 0.25467450815957865, 0.25490592772409243,
    0.25513711320297094, 0.2553680648073405, 0.25559878274773457, 0.2558292672340959,
    0.25605951847577896, 0.25628953668155224, 0.2565193220596009, 0.25674887481752834,
    0.2569781951623594, 0.257207283300542, 0.2574361394379495, 0.25766476377988334,
    0.25789315653107486, 0.25812131789568776, 0.2583492480773203, 0.2585769472790074,
    0.2588044157032229, 0.25903165355188185, 0.2592586610263427, 0.2594854383274092,
    0.25971198565533293, 0.25993830320981504, 0.2601643911900086, 0.2603902497945209,
    0.2606158792214152, 0.260841279668213, 0.26106645133189615, 0.261291394408909,
    0.2615161090951601, 0.2617405955860248, 0.26196485407634684, 0.2621888847604405,
    0.2624126878320929, 0.26263626348456537, 0.26285961191059637, 0.2630827333024026,
    0.2633056278516815, 0.263528295749613, 0.2637507371868616, 0.26397295235357815,
    0.26419494143940214, 0.2644167046334631, 0.2646382421243831, 0.26485955410027806,
    0.2650806407487602, 0.2653015022569396, 0.2655221388114261, 0.26574255059833146,
    0.2659627378032706, 0.2661827006113643, 0.26640243920724016, 0.2666219537750352,
    0.2668412444983971, 0.26706031156048626, 0.26727915514397776, 0.26749777543106296,
    0.2677161726034511, 0.2679343468423715, 0.268152298328575, 0.26837002724233594,
    0.2685875337634536, 0.26880481807125445, 0.26902188034459323, 0.26923872076185523,
    0.26945533950095774, 0.26967173673935174, 0.26988791265402384, 0.27010386742149745,
    0.2703196012178352, 0.27053511421863996, 0.27075040659905675, 0.27096547853377445,
    0.2711803301970274, 0.2713949617625971, 0.2716093734038135, 0.27182356529355733,
    0.27203753760426086, 0.2722512905079101, 0.27246482417604617, 0.2726781387797671,
    0.27289123448972896, 0.273104111476148, 0.2733167699088018, 0.273529209957031,
    0.2737414317897408, 0.27395343557540247, 0.27416522148205513, 0.27437678967730694,
    0.2745881403283367, 0.2747992736018957, 0.27501018966430874, 0.2752208886814758,
    0.27543137081887376, 0.2756416362415576, 0.27585168511416197, 0.27606151760090275,
    0.2762711338655784, 0.2764805340715713, 0.2766897183818497, 0.27689868695896835,
    0.2771074399650708, 0.2773159775618902, 0.27752429991075095, 0.27773240717257014,
    0.27794029950785903, 0.2781479770767242, 0.27835544003886903, 0.27856268855359545,
    0.27876972277980466, 0.27897654287599905, 0.2791831490002833, 0.27938954131036586,
    0.27959571996356036, 0.2798016851167866, 0.2800074369265724, 0.28021297554905455,
    0.2804183011399803, 0.28062341385470874, 0.28082831384821194, 0.28103300127507636,
    0.2812374762895042, 0.28144173904531455, 0.28164578969594484, 0.2818496283944522,
    0.2820532552935143, 0.28225667054543124, 0.2824598743021263, 0.28266286671514745,
    0.2828656479356686, 0.2830682181144908, 0.2832705774020434, 0.2834727259483857,
    0.2836746639032074, 0.2838763914158307, 0.2840779086352109, 0.2842792157099378,
    0.28448031278823716, 0.28468120001797154, 0.28488187754664157, 0.2850823455213874,
    0.2852826040889896, 0.2854826533958704, 0.2856824935880951, 0.2858821248113729,
    0.28608154721105816, 0.2862807609321519, 0.28647976611930237, 0.28667856291680677,
    0.28687715146861187, 0.2870755319183157, 0.2872737044091683, 0.28747166908407273,
    0.28766942608558677, 0.2878669755559235, 0.28806431763695256, 0.28826145247020135,
    0.2884583801968561, 0.288655100957763, 0.2888516148934291, 0.28904792214402364,
    0.28924402284937906, 0.289439917148992, 0.2896356051820244, 0.28983108708730476,
    0.290026363003329, 0.29022143306826137, 0.2904162974199359, 0.29061095619585725,
    0.2908054095332017, 0.2909996575688183, 0.29119370043922976, 0.29138753828063374,
    0.2915811712289036, 0.2917745994195896, 0.29196782298791985, 0.2921608420688013,
    0.2923536567968208, 0.2925462673062461, 0.29273867373102697, 0.2929308762047958,
    0.2931228748608691, 0.2933146698322481, 0.29350626125161994, 0.2936976492513586,
    0.29388883396352583, 0.2940798155198722, 0.29427059405183803, 0.29446116969055425,
    0.2946515425668435, 0.2948417128112211, 0.2950316805538959, 0.2952214459247712,
    0.2954110090534457, 0.2956003700692147, 0.29578952910107065, 0.2959784862777043,
    0.2961672417275055, 0.29635579557856445, 0.296544147958672, 0.29673229899532116,
    0.2969202488157078, 0.2971079975467313, 0.2972955453149959, 0.2974828922468113,
    0.29767003846819373, 0.2978569841048665, 0.29804372928226136, 0.2982302741255191,
    0.2984166187594904, 0.2986027633087368, 0.2987887078975317, 0.29897445264986083,
    0.29915999768942364, 0.2993453431396336, 0.2995304891236196, 0.2997154357642264,
    0.2999001831840156, 0.30008473150526666, 0.3002690808499774, 0.3004532313398651,
    0.30063718309636733, 0.30082093624064277, 0.3010044908935716, 0.30118784717575725,
    0.3013710052075263, 0.30155396510892973, 0.3017367269997438, 0.30191929099947057,
    0.30210165722733906, 0.3022838258023058, 0.3024657968430555, 0.30264757046800245,
    0.3028291467952905, 0.30301052594279454, 0.30319170802812084, 0.3033726931686081,
    0.3035534814813281, 0.30373407308308653, 0.30391446809042366, 0.30409466661961526,
    0.30427466878667336, 0.3044544747073468, 0.30463408449712226, 0.30481349827122495,
    0.30499271614461915, 0.30517173823200927, 0.30535056464784044, 0.30552919550629914,
    0.30570763092131437, 0.30588587100655784, 0.30606391587544507, 0.306241765641136,
    0.3064194204165357, 0.3065968803142953, 0.3067741454468122, 0.3069512159262316,
    0.3071280918644465, 0.30730477337309864, 0.3074812605635794, 0.3076575535470302,
    0.3078336524343436, 0.30800955733616353, 0.30818526836288634, 0.30836078562466146,
    0.30853610923139196, 0.30871123929273525, 0.3088861759181039, 0.30906091921666634,
    0.3092354692973473, 0.3094098262688288, 0.3095839902395506, 0.309757961317711,
    0.3099317396112674, 0.3101053252279372, 0.31027871827519826, 0.31045191886028944,
    0.3106249270902118, 0.31079774307172847, 0.3109703669113661, 0.31114279871541506,
    0.31131503858993004, 0.31148708664073105, 0.3116589429734038, 0.3118306076933003,
    0.3120020809055398, 0.31217336271500923, 0.31234445322636356, 0.3125153525440272,
    0.31268606077219363, 0.31285657801482697, 0.3130269043756621, 0.3131970399582053,
    0.3133669848657349, 0.3135367392013021, 0.3137063030677314, 0.31387567656762116,
    0.3140448598033444, 0.31421385287704934, 0.31438265589065983, 0.3145512689458763,
    0.31471969214417606, 0.314887925586814, 0.3150559693748232, 0.3152238236090157,
    0.3153914883899827, 0.31555896381809545, 0.3157262499935057, 0.3158933470161465,
    0.31606025498573265, 0.3162269740017609, 0.3163935041635113, 0.31655984557004724,
    0.31672599832021614, 0.31689196251264995, 0.31705773824576594, 0.31722332561776717,
    0.31738872472664287, 0.3175539356701693, 0.3177189585459101, 0.31788379345121687,
    0.31804844048323, 0.3182128997388788, 0.3183771713148823, 0.3185412553077498,
    0.3187051518137813, 0.3188688609290683, 0.3190323827494941, 0.3191957173707342,
    0.3193588648882575, 0.3195218253973259, 0.31968459899299567, 0.3198471857701176,
    0.3200095858233375, 0.3201717992470968, 0.32033382613563327, 0.3204956665829812,
    0.320657320682972, 0.3208187885292352, 0.3209800702151981, 0.3211411658340871,
    0.32130207547892786, 0.3214627992425458, 0.3216233372175666, 0.32178368949641684,
    0.3219438561713245, 0.3221038373343193, 0.3222636330772333, 0.3224232434917016,
    0.3225826686691625, 0.3227419087008581, 0.3229009636778351, 0.32305983369094476,
    0.32321851883084396, 0.3233770191879952, 0.3235353348526675, 0.32369346591493653,
    0.32385141246468535, 0.3240091745916049, 0.32416675238519416, 0.32432414593476105,
    0.32448135532942274, 0.3246383806581059, 0.3247952220095477, 0.3249518794722957,
    0.32510835313470887, 0.32526464308495745, 0.325420749411024, 0.3255766722007035,
    0.32573241154160415, 0.32588796752114735, 0.32604334022656856, 0.3261985297449176,
    0.32635353616305923, 0.3265083595676735, 0.3266630000452561, 0.3268174576821191,
    0.32697173256439116, 0.32712582477801805, 0.3272797344087632, 0.3274334615422079,
    0.32758700626375215, 0.32774036865861456, 0.32789354881183336, 0.32804654680826645,
    0.3281993627325919, 0.3283519966693086, 0.3285044487027364, 0.3286567189170167,
    0.328808807396113, 0.3289607142238112, 0.3291124394837198, 0.32926398325927086,
    0.3294153456337198, 0.3295665266901465, 0.32971752651145525, 0.32986834518037506,
    0.3300189827794607, 0.33016943939109233, 0.33031971509747676, 0.3304698099806471,
    0.33061972412246365, 0.3307694576046141, 0.3309190105086141, 0.3310683829158075,
    0.33121757490736675, 0.33136658656429363, 0.33151541796741923, 0.33166406919740465,
    0.33181254033474117, 0.33196083145975086, 0.33210894265258695, 0.332256873993234,
    0.3324046255615086, 0.3325521974370597, 0.33269958969936886, 0.33284680242775067,
    0.33299383570135316, 0.3331406895991585, 0.3332873641999828, 0.33343385958247684,
    0.3335801758251268, 0.33372631300625377, 0.33387227120401486, 0.33401805049640343,
    0.3341636509612493, 0.3343090726762192, 0.33445431571881723, 0.33459938016638513,
    0.3347442660961028, 0.3348889735849884, 0.3350335027098992, 0.3351778535475312,
    0.3353220261744204, 0.3354660206669424, 0.3356098371013133, 0.3357534755535897,
    0.3358969360996693, 0.33604021881529117, 0.33618332377603605, 0.33632625105732694,
    0.33646900073442915, 0.3366115728824508, 0.3367539675763433, 0.33689618489090156,
    0.3370382249007643, 0.33718008768041463, 0.33732177330418, 0.3374632818462331,
    0.3376046133805917, 0.3377457679811193, 0.33788674572152544, 0.33802754667536583,
    0.33816817091604295, 0.3383086185168063, 0.33844888955075286, 0.33858898409082716,
    0.3387289022098217, 0.33886864398037764, 0.33900820947498467, 0.3391475987659815,
    0.3392868119255564, 0.3394258490257472, 0.33956471013844197, 0.339703395335379,
    0.3398419046881474, 0.33998023826818735, 0.3401183961467903, 0.34025637839509953,
    0.3403941850841103, 0.3405318162846702, 0.34066927206747966, 0.34080655250309183,
    0.34094365766191354, 0.34108058761420496, 0.34121734243008045, 0.3413539221795085,
    0.3414903269323123, 0.34162655675816994, 0.34176261172661476, 0.34189849190703564,
    0.3420341973686773, 0.3421697281806406, 0.34230508441188306, 0.34244026613121886,
    0.3425752734073192, 0.3427101063087129, 0.3428447649037864, 0.3429792492607841,
    0.3431135594478089, 0.34324769553282214, 0.34338165758364425, 0.34351544566795483,
    0.3436490598532931, 0.3437825002070579, 0.3439157667965085, 0.34404885968876436,
    0.34418177895080593, 0.3443145246494743, 0.34444709685147235, 0.3445794956233642,
    0.3447117210315761, 0.3448437731423964, 0.34497565202197594, 0.34510735773632834,
    0.3452388903513304, 0.34537024993272214, 0.34550143654610727, 0.34563245025695344,
    0.34576329113059245, 0.34589395923222077, 0.34602445462689946, 0.3461547773795547,
    0.3462849275549781, 0.34641490521782675, 0.3465447104326238, 0.3466743432637584,
    0.34680380377548636, 0.3469330920319301, 0.34706220809707905, 0.34719115203478995,
    0.34731992390878713, 0.3474485237826627, 0.34757695171987685, 0.3477052077837583,
    0.3478332920375041, 0.3479612045441807, 0.3480889453667233, 0.3482165145679367,
    0.3483439122104954, 0.3484711383569438, 0.3485981930696969, 0.3487250764110397,
    0.3488517884431284, 0.34897832922799005, 0.3491046988275228, 0.3492308973034967,
    0.34935692471755353, 0.34948278113120707, 0.3496084666058433, 0.34973398120272114,
    0.34985932498297206, 0.34998449800760073, 0.35010950033748517, 0.3502343320333771,
    0.3503589931559019, 0.3504834837655592, 0.350607803922723, 0.3507319536876419,
    0.3508559331204393, 0.3509797422811137, 0.3511033812295392, 0.3512268500254653,
    0.3513501487285172, 0.35147327739819656, 0.35159623609388113, 0.3517190248748254,
    0.3518416438001606, 0.3519640929288949, 0.3520863723199142, 0.3522084820319814,
    0.3523304221237377, 0.35245219265370203, 0.3525737936802717, 0.3526952252617225,
    0.3528164874562089, 0.35293758032176464, 0.3530585039163022, 0.353179258297614,
    0.3532998435233718, 0.35342025965112744, 0.3535405067383129, 0.35366058484224044,
    0.3537804940201031, 0.35390023432897466, 0.3540198058258099, 0.3541392085674451,
    0.3542584426105978, 0.3543775080118676, 0.3544964048277359, 0.3546151331145663,
    0.3547336929286049, 0.3548520843259804, 0.3549703073627044, 0.35508836209467165,
    0.3552062485776602, 0.3553239668673315, 0.355441517019231, 0.35555889908878807,
    0.3556761131313161, 0.3557931592020131, 0.3559100373559617, 0.35602674764812936,
    0.35614329013336854, 0.35625966486641714, 0.3563758719018984, 0.3564919112943214,
    0.35660778309808105, 0.3567234873674585, 0.3568390241566213, 0.3569543935196234,
    0.3570695955104055, 0.3571846301827956, 0.35729949759050866, 0.35741419778714706,
    0.3575287308262008, 0.3576430967610478, 0.3577572956449538, 0.357871327531073,
    0.357985192472448, 0.3580988905220099, 0.3582124217325788, 0.35832578615686383,
    0.35843898384746326, 0.358552014856865, 0.3586648792374465, 0.358777577041475,
    0.35889010832110807, 0.3590024731283932, 0.35911467151526855, 0.359226703533563,
    0.3593385692349961, 0.35945026867117846, 0.35956180189361214, 0.35967316895369045,
    0.35978436990269846, 0.359895404791813, 0.36000627367210286, 0.36011697659452924,
    0.3602275136099457, 0.3603378847690983, 0.3604480901226259, 0.36055812972106055,
    0.3606680036148273, 0.36077771185424456, 0.36088725448952447, 0.3609966315707726,
    0.3611058431479889, 0.36121488927106704, 0.3613237699897952, 0.361432485353856,
    0.36154103541282684, 0.3616494202161798, 0.36175763981328224, 0.36186569425339643,
    0.36197358358568044, 0.3620813078591876, 0.3621888671228673, 0.3622962614255648,
    0.36240349081602136, 0.36251055534287474, 0.3626174550546592, 0.36272418999980555,
    0.36283076022664157, 0.3629371657833921, 0.3630434067181791, 0.363149483079022,
    0.3632553949138378, 0.3633611422704412, 0.36346672519654494, 0.3635721437397597,
    0.3636773979475945, 0.36378248786745687, 0.3638874135466529, 0.3639921750323874,
    0.36409677237176424, 0.36420120561178654, 0.3643054747993564, 0.3644095799812757,
    0.36451352120424585, 0.364617298514868, 0.3647209119596435, 0.36482436158497367,
    0.3649276474371601, 0.3650307695624051, 0.3651337280068115, 0.3652365228163828,
    0.3653391540370238, 0.3654416217145403, 0.3655439258946394, 0.3656460666229296,
    0.3657480439449213, 0.36584985790602637, 0.36595150855155895, 0.3660529959267352,
    0.3661543200766734, 0.3662554810463947, 0.3663564788808225, 0.36645731362478307,
    0.3665579853230056, 0.3666584940201225, 0.36675883976066936, 0.36685902258908515,
    0.36695904254971234, 0.36705889968679734, 0.36715859404449025, 0.36725812566684535,
    0.3673574945978209, 0.3674567008812798, 0.3675557445609892, 0.3676546256806211,
    0.36775334428375217, 0.3678519004138642, 0.3679502941143438, 0.3680485254284833,
    0.36814659439948005, 0.36824450107043716, 0.3683422454843634, 0.3684398276841736,
    0.36853724771268825, 0.36863450561263444, 0.3687316014266452, 0.3688285351972603,
    0.368925306966926, 0.36902191677799545, 0.3691183646727285, 0.36921465069329223,
    0.369310774881761, 0.36940673728011625, 0.36950253793024723, 0.36959817687395063,
    0.3696936541529309, 0.3697889698088006, 0.3698841238830803, 0.36997911641719866,
    0.37007394745249295, 0.3701686170302086, 0.37026312519150006, 0.3703574719774303,
    0.3704516574289714, 0.3705456815870043, 0.3706395444923193, 0.3707332461856161,
    0.3708267867075037, 0.3709201660985008, 0.37101338439903603, 0.37110644164944767,
    0.37119933788998427, 0.37129207316080426, 0.3713846475019767, 0.3714770609534809,
    0.37156931355520684, 0.37166140534695513, 0.37175333636843744, 0.3718451066592761,
    0.37193671625900493, 0.3720281652070687, 0.3721194535428238, 0.3722105813055379,
    0.3723015485343907, 0.3723923552684732, 0.3724830015467887, 0.37257348740825247,
    0.37266381289169176, 0.3727539780358464, 0.37284398287936854, 0.3729338274608229,
    0.37302351181868687, 0.37311303599135065, 0.37320240001711763, 0.3732916039342039,
    0.3733806477807391, 0.3734695315947661, 0.3735582554142411, 0.37364681927703397,
    0.3737352232209285, 0.37382346728362204, 0.37391155150272604, 0.37399947591576604,
    0.3740872405601818, 0.37417484547332736, 0.3742622906924713, 0.3743495762547967,
    0.37443670219740155, 0.37452366855729846, 0.374610475371415, 0.374697122676594,
    0.37478361050959336, 0.37486993890708625, 0.3749561079056614, 0.37504211754182304,
    0.3751279678519911, 0.3752136588725013, 0.3752991906396053, 0.3753845631894707,
    0.3754697765581814, 0.3755548307817375, 0.3756397258960555, 0.3757244619369684,
    0.37580903894022577, 0.37589345694149406, 0.3759777159763565, 0.3760618160803133,
    0.3761457572887817, 0.3762295396370962, 0.3763131631605087, 0.37639662789418843,
    0.3764799338732221, 0.3765630811326143, 0.37664606970728715, 0.37672889963208084,
    0.37681157094175344, 0.3768940836709812, 0.37697643785435864, 0.37705863352639846,
    0.3771406707215319, 0.3772225494741088, 0.37730426981839765, 0.37738583178858565,
    0.37746723541877886, 0.3775484807430025, 0.37762956779520074, 0.377710496609237,
    0.3777912672188941, 0.3778718796578742, 0.3779523339597991, 0.3780326301582101,
    0.3781127682865683, 0.3781927483782548, 0.3782725704665705, 0.3783522345847364,
    0.3784317407658937, 0.378511089043104, 0.37859027944934903, 0.37866931201753123,
    0.3787481867804736, 0.3788269037709197, 0.3789054630215341, 0.37898386456490213,
    0.3790621084335302, 0.37914019465984583, 0.3792181232761977, 0.37929589431485583,
    0.37937350780801166, 0.3794509637877782, 0.3795282622861901, 0.37960540333520365,
    0.3796823869666969, 0.3797592132124701, 0.3798358821042451, 0.37991239367366636,
    0.3799887479523002, 0.38006494497163534, 0.38014098476308306, 0.38021686735797694,
    0.3802925927875734, 0.3803681610830514, 0.38044357227551273, 0.3805188263959823,
    0.38059392347540766, 0.3806688635446598, 0.38074364663453264, 0.3808182727757436,
    0.3808927419989334, 0.38096705433466627, 0.3810412098134299, 0.38111520846563585,
    0.3811890503216193, 0.3812627354116393, 0.3813362637658789, 0.3814096354144453,
    0.38148285038736957, 0.38155590871460726, 0.38162881042603813, 0.3817015555514664,
    0.3817741441206208, 0.38184657616315454, 0.38191885170864576, 0.3819909707865972,
    0.3820629334264366, 0.38213473965751643, 0.3822063895091145, 0.38227788301043364,
    0.38234922019060186, 0.38242040107867264, 0.38249142570362465, 0.38256229409436227,
    0.3826330062797154, 0.3827035622884396, 0.38277396214921616, 0.3828442058906523,
    0.38291429354128126, 0.382984225129562, 0.3830540006838799, 0.38312362023254637,
    0.3831930838037992, 0.38326239142580254, 0.3833315431266469, 0.3834005389343495,
    0.38346937887685406, 0.383538062982031, 0.38360659127767766, 0.3836749637915181,
    0.38374318055120343, 0.38381124158431185, 0.3838791469183487, 0.3839468965807464,
    0.3840144905988647, 0.38408192899999094, 0.3841492118113396, 0.384216339060053,
    0.3842833107732009, 0.38435012697778076, 0.38441678770071797, 0.3844832929688657,
    0.38454964280900505, 0.38461583724784515, 0.3846818763120233, 0.384747760028105,
    0.3848134884225839, 0.38487906152188217, 0.38494447935235027, 0.3850097419402672,
    0.3850748493118405, 0.3851398014932066, 0.3852045985104304, 0.38526924038950566,
    0.38533372715635517, 0.38539805883683065, 0.3854622354567128, 0.3855262570417115,
    0.38559012361746586, 0.3856538352095442, 0.3857173918434442, 0.38578079354459316,
    0.3858440403383475, 0.3859071322499937, 0.3859700693047474, 0.38603285152775446,
    0.38609547894409013, 0.3861579515787599, 0.38622026945669885, 0.3862824326027724,
    0.3863444410417759, 0.3864062947984349, 0.38646799389740527, 0.3865295383632731,
    0.38659092822055496, 0.3866521634936978, 0.3867132442070792, 0.38677417038500733,
    0.3868349420517209, 0.3868955592313895, 0.3869560219481137, 0.3870163302259246,
    0.3870764840887845, 0.38713648356058666, 0.3871963286651555, 0.3872560194262466,
    0.3873155558675468, 0.38737493801267403, 0.387434165885178, 0.38749323950853953,
    0.3875521589061711, 0.3876109241014168, 0.3876695351175522, 0.38772799197778496,
    0.38778629470525405, 0.38784444332303075, 0.38790243785411793, 0.3879602783214506,
    0.3880179647478958, 0.38807549715625267, 0.38813287556925263, 0.3881901000095593,
    0.3882471704997686, 0.3883040870624088, 0.3883608497199408, 0.3884174584947578,
    0.3884739134091857, 0.3885302144854829, 0.38858636174584094, 0.38864235521238355,
    0.3886981949071677, 0.3887538808521832, 0.3888094130693526, 0.3888647915805318,
    0.3889200164075096, 0.388975087572008, 0.3890300050956822, 0.38908476900012073,
    0.3891393793068454, 0.38919383603731145, 0.3892481392129076, 0.38930228885495605,
    0.3893562849847127, 0.389410127623367, 0.3894638167920421, 0.38951735251179503,
    0.3895707348036164, 0.3896239636884311, 0.3896770391870977, 0.38972996132040866,
    0.3897827301090909, 0.3898353455738052, 0.3898878077351466, 0.38994011661364425,
    0.38999227222976185, 0.3900442746038973, 0.390096123756383, 0.3901478197074857,
    0.39019936247740683, 0.3902507520862824, 0.390301988554183, 0.390353071901114,
    0.3904040021470154, 0.39045477931176226, 0.39050540341516427, 0.39055587447696627,
    0.39060619251684786, 0.3906563575544239, 0.3907063696092443, 0.390756228700794,
    0.39080593484849335, 0.3908554880716978, 0.3909048883896982, 0.3909541358217208,
    0.3910032303869272, 0.3910521721044145, 0.3911009609932155, 0.3911495970722984,
    0.39119808036056714, 0.39124641087686124, 0.39129458863995614, 0.391342613668563,
    0.3913904859813289, 0.39143820559683673, 0.3914857725336054, 0.39153318681008986,
    0.39158044844468104, 0.3916275574557061, 0.3916745138614283, 0.39172131768004714,
    0.39176796892969845, 0.3918144676284542, 0.3918608137943229, 0.39190700744524953,
    0.3919530485991154, 0.3919989372737384, 0.392044673486873, 0.3920902572562103,
    0.39213568859937803, 0.3921809675339407, 0.39222609407739967, 0.3922710682471929,
    0.39231589006069534, 0.3923605595352189, 0.3924050766880125, 0.3924494415362618,
    0.3924936540970899, 0.3925377143875567, 0.39258162242465944, 0.39262537822533244,
    0.3926689818064474, 0.39271243318481325, 0.3927557323771762, 0.39279887940022007,
    0.3928418742705658, 0.39288471700477207, 0.39292740761933503, 0.3929699461306883,
    0.3930123325552033, 0.39305456690918894, 0.393096649208892, 0.39313857947049674,
    0.3931803577101257, 0.3932219839438388, 0.3932634581876341, 0.39330478045744754,
    0.39334595076915296, 0.39338696913856236, 0.39342783558142574, 0.3934685501134312,
    0.39350911275020495, 0.39354952350731154, 0.39358978240025355, 0.39362988944447214,
    0.39366984465534643, 0.39370964804819425, 0.39374929963827154, 0.3937887994407729,
    0.3938281474708314, 0.39386734374351845, 0.39390638827384433, 0.39394528107675775,
    0.3939840221671461, 0.39402261155983553, 0.3940610492695909, 0.39409933531111574,
    0.39413746969905256, 0.39417545244798263, 0.3942132835724263, 0.39425096308684254,
    0.39428849100562957, 0.3943258673431245, 0.39436309211360365, 0.3944001653312822,
    0.3944370870103146, 0.39447385716479455, 0.39451047580875476, 0.39454694295616743,
    0.3945832586209439, 0.39461942281693485, 0.3946554355579303, 0.39469129685765986,
    0.3947270067297923, 0.39476256518793607, 0.39479797224563906, 0.3948332279163887,
    0.3948683322136121, 0.39490328515067585, 0.3949380867408864, 0.3949727369974897,
    0.3950072359336715, 0.39504158356255736, 0.39507577989721265, 0.39510982495064245,
    0.3951437187357919, 0.39517746126554604, 0.39521105255272965, 0.39524449261010763,
    0.395277781450385, 0.3953109190862066, 0.3953439055301576, 0.395376740794763,
    0.3954094248924883, 0.39544195783573893, 0.3954743396368606, 0.39550657030813924,
    0.3955386498618012, 0.395570578310013, 0.39560235566488167, 0.3956339819384544,
    0.39566545714271906, 0.3956967812896037, 0.3957279543909772, 0.39575897645864855,
    0.3957898475043675, 0.3958205675398244, 0.3958511365766502, 0.3958815546264165,
    0.39591182170063544, 0.39594193781076, 0.3959719029681838, 0.3960017171842413,
    0.39603138047020775, 0.3960608928372992, 0.39609025429667255, 0.3961194648594256,
    0.3961485245365971, 0.3961774333391666, 0.39620619127805484, 0.39623479836412345,
    0.396263254608175, 0.39629156002095334, 0.39631971461314325, 0.3963477183953706,
    0.3963755713782025, 0.3964032735721474, 0.3964308249876545, 0.3964582256351147,
    0.39648547552485985, 0.3965125746671633, 0.39653952307223955, 0.3965663207502445,
    0.39659296771127545, 0.3966194639653711, 0.3966458095225116, 0.3966720043926184,
    0.39669804858555463, 0.3967239421111247, 0.3967496849790748, 0.39677527719909256,
    0.3968007187808071, 0.39682600973378923, 0.3968511500675514, 0.3968761397915478,
    0.3969009789151741, 0.39692566744776797, 0.3969502053986084, 0.3969745927769166,
    0.39699882959185523, 0.39702291585252886, 0.39704685156798397, 0.3970706367472087,
    0.3970942713991334, 0.3971177555326299, 0.39714108915651236, 0.3971642722795366,
    0.3971873049104006, 0.3972101870577442, 0.3972329187301493, 0.39725549993613996,
    0.39727793068418216, 0.397300210982684, 0.3973223408399956, 0.3973443202644096,
    0.3973661492641603, 0.39738782784742444, 0.39740935602232097, 0.3974307337969109,
    0.3974519611791977, 0.3974730381771268, 0.3974939647985863, 0.3975147410514063,
    0.3975353669433593, 0.3975558424821603, 0.3975761676754664, 0.3975963425308773,
    0.39761636705593495, 0.3976362412581239, 0.3976559651448711, 0.3976755387235458,
    0.3976949620014599, 0.3977142349858678, 0.3977333576839663, 0.3977523301028949,
    0.39777115224973564, 0.397789824131513, 0.39780834575519414, 0.3978267171276889,
    0.39784493825584977, 0.3978630091464717, 0.3978809298062925, 0.3978987002419926,
    0.3979163204601952, 0.39793379046746613, 0.397951110270314, 0.3979682798751902,
    0.3979852992884888, 0.39800216851654696, 0.3980188875656442, 0.3980354564420032,
    0.39805187515178947, 0.39806814370111115, 0.39808426209601944, 0.39810023034250847,
    0.3981160484465151, 0.39813171641391926, 0.39814723425054377, 0.39816260196215436,
    0.3981778195544598, 0.39819288703311184, 0.39820780440370523, 0.3982225716717776,
    0.39823718884280973, 0.39825165592222556, 0.3982659729153918, 0.39828013982761845,
    0.3982941566641585, 0.3983080234302081, 0.39832174013090654, 0.398335306771336,
    0.3983487233565221, 0.39836198989143345, 0.3983751063809819, 0.3983880728300223,
    0.39840088924335304, 0.39841355562571534, 0.39842607198179386, 0.39843843831621634,
    0.398450654633554, 0.398462720938321, 0.39847463723497506, 0.3984864035279169,
    0.39849801982149075, 0.39850948611998405, 0.3985208024276275, 0.3985319687485952,
    0.39854298508700453, 0.3985538514469163, 0.3985645678323345, 0.39857513424720675,
    0.3985855506954237, 0.39859581718081966, 0.3986059337071723, 0.39861590027820254,
    0.39862571689757487, 0.3986353835688971, 0.3986449002957206, 0.39865426708153995,
    0.39866348392979345, 0.3986725508438627, 0.3986814678270728, 0.39869023488269234,
    0.3986988520139334, 0.39870731922395153, 0.39871563651584585, 0.3987238038926588,
    0.3987318213573766, 0.39873968891292894, 0.39874740656218877, 0.39875497430797285,
    0.39876239215304154, 0.39876966010009857, 0.39877677815179124, 0.3987837463107106,
    0.3987905645793911, 0.39879723296031083, 0.3988037514558915, 0.3988101200684983,
    0.39881633880044026, 0.3988224076539697, 0.39882832663128287, 0.39883409573451944,
    0.39883971496576265, 0.39884518432703964, 0.39885050382032095, 0.3988556734475208,
    0.39886069321049716, 0.3988655631110515, 0.39887028315092904, 0.39887485333181866,
    0.398879273655353, 0.398883544123108, 0.3988876647366037, 0.3988916354973036,
    0.39889545640661495, 0.39889912746588857, 0.3989026486764192, 0.398906020039445,
    0.398909241556148, 0.3989123132276538, 0.39891523505503185, 0.3989180070392951,
    0.3989206291814005, 0.3989231014822484, 0.3989254239426831, 0.3989275965634924,
    0.398929619345408, 0.3989314922891052, 0.398933215395203, 0.39893478866426413,
    0.39893621209679525, 0.39893748569324644, 0.39893860945401166, 0.39893958337942853,
    0.3989404074697785, 0.39894108172528653, 0.39894160614612156, 0.3989419807323962,
    0.39894220548416653, 0.3989422804014327, 0.3989422804014327, 0.39894220548416653,
    0.3989419807323962, 0.39894160614612156, 0.39894108172528653, 0.3989404074697785,
    0.39893958337942853, 0.39893860945401166, 0.39893748569324644, 0.39893621209679525,
    0.39893478866426413, 0.398933215395203, 0.3989314922891052, 0.398929619345408,
    0.3989275965634924, 0.3989254239426831, 0.3989231014822484, 0.3989206291814005,
    0.3989180070392951, 0.39891523505503185, 0.3989123132276538, 0.398909241556148,
    0.398906020039445, 0.3989026486764192, 0.39889912746588857, 0.39889545640661495,
    0.3988916354973036, 0.3988876647366037, 0.398883544123108, 0.398879273655353,
    0.39887485333181866, 0.39887028315092904, 0.3988655631110515, 0.39886069321049716,
    0.3988556734475208, 0.39885050382032095, 0.39884518432703964, 0.39883971496576265,
    0.39883409573451944, 0.39882832663128287, 0.3988224076539697, 0.39881633880044026,
    0.3988101200684983, 0.3988037514558915, 0.39879723296031083, 0.3987905645793911,
    0.3987837463107106, 0.39877677815179124, 0.39876966010009857, 0.39876239215304154,
    0.39875497430797285, 0.39874740656218877, 0.39873968891292894, 0.3987318213573766,
    0.3987238038926588, 0.39871563651584585, 0.39870731922395153, 0.3986988520139334,
    0.39869023488269234, 0.3986814678270728, 0.3986725508438627, 0.39866348392979345,
    0.39865426708153995, 0.3986449002957206, 0.3986353835688971, 0.39862571689757487,
    0.39861590027820254, 0.3986059337071723, 0.39859581718081966, 0.3985855506954237,
    0.39857513424720675, 0.3985645678323345, 0.3985538514469163, 0.39854298508700453,
    0.3985319687485952, 0.3985208024276275, 0.39850948611998405, 0.39849801982149075,
    0.3984864035279169, 0.39847463723497506, 0.398462720938321, 0.398450654633554,
    0.39843843831621634, 0.39842607198179386, 0.39841355562571534, 0.39840088924335304,
    0.3983880728300223, 0.3983751063809819, 0.39836198989143345, 0.3983487233565221,
    0.398335306771336, 0.39832174013090654, 0.3983080234302081, 0.3982941566641585,
    0.39828013982761845, 0.3982659729153918, 0.39825165592222556, 0.39823718884280973,
    0.3982225716717776, 0.39820780440370523, 0.39819288703311184, 0.3981778195544598,
    0.39816260196215436, 0.39814723425054377, 0.39813171641391926, 0.3981160484465151,
    0.39810023034250847, 0.39808426209601944, 0.39806814370111115, 0.39805187515178947,
    0.3980354564420032, 0.3980188875656442, 0.39800216851654696, 0.3979852992884888,
    0.3979682798751902, 0.397951110270314, 0.39793379046746613, 0.3979163204601952,
    0.3978987002419926, 0.3978809298062925, 0.3978630091464717, 0.39784493825584977,
    0.3978267171276889, 0.39780834575519414, 0.397789824131513, 0.39777115224973564,
    0.3977523301028949, 0.3977333576839663, 0.3977142349858678, 0.3976949620014599,
    0.3976755387235458, 0.3976559651448711, 0.3976362412581239, 0.39761636705593495,
    0.3975963425308773, 0.3975761676754664, 0.3975558424821603, 0.3975353669433593,
    0.3975147410514063, 0.3974939647985863, 0.3974730381771268, 0.3974519611791977,
    0.3974307337969109, 0.39740935602232097, 0.39738782784742444, 0.3973661492641603,
    0.3973443202644096, 0.3973223408399956, 0.397300210982684, 0.39727793068418216,
    0.39725549993613996, 0.3972329187301493, 0.3972101870577442, 0.3971873049104006,
    0.3971642722795366, 0.39714108915651236, 0.3971177555326299, 0.3970942713991334,
    0.3970706367472087, 0.39704685156798397, 0.39702291585252886, 0.39699882959185523,
    0.3969745927769166, 0.3969502053986084, 0.39692566744776797, 0.3969009789151741,
    0.3968761397915478, 0.3968511500675514, 0.39682600973378923, 0.3968007187808071,
    0.39677527719909256, 0.3967496849790748, 0.3967239421111247, 0.39669804858555463,
    0.3966720043926184, 0.3966458095225116, 0.3966194639653711, 0.39659296771127545,
    0.3965663207502445, 0.39653952307223955, 0.3965125746671633, 0.39648547552485985,
    0.3964582256351147, 0.3964308249876545, 0.3964032735721474, 0.3963755713782025,
    0.3963477183953706, 0.39631971461314325, 0.39629156002095334, 0.396263254608175,
    0.39623479836412345, 0.39620619127805484, 0.3961774333391666, 0.3961485245365971,
    0.3961194648594256, 0.39609025429667255, 0.3960608928372992, 0.39603138047020775,
    0.3960017171842413, 0.3959719029681838, 0.39594193781076, 0.39591182170063544,
    0.3958815546264165, 0.3958511365766502, 0.3958205675398244, 0.3957898475043675,
    0.39575897645864855, 0.3957279543909772, 0.3956967812896037, 0.39566545714271906,
    0.3956339819384544, 0.39560235566488167, 0.395570578310013, 0.3955386498618012,
    0.39550657030813924, 0.3954743396368606, 0.39544195783573893, 0.3954094248924883,
    0.395376740794763, 0.3953439055301576, 0.3953109190862066, 0.395277781450385,
    0.39524449261010763, 0.39521105255272965, 0.39517746126554604, 0.3951437187357919,
    0.39510982495064245, 0.39507577989721265, 0.39504158356255736, 0.3950072359336715,
    0.3949727369974897, 0.3949380867408864, 0.39490328515067585, 0.3948683322136121,
    0.3948332279163887, 0.39479797224563906, 0.39476256518793607, 0.3947270067297923,
    0.39469129685765986, 0.3946554355579303, 0.39461942281693485, 0.3945832586209439,
    0.39454694295616743, 0.39451047580875476, 0.39447385716479455, 0.3944370870103146,
    0.3944001653312822, 0.39436309211360365, 0.3943258673431245, 0.39428849100562957,
    0.39425096308684254, 0.3942132835724263, 0.39417545244798263, 0.39413746969905256,
    0.39409933531111574, 0.3940610492695909, 0.39402261155983553, 0.3939840221671461,
    0.39394528107675775, 0.39390638827384433, 0.39386734374351845, 0.3938281474708314,
    0.3937887994407729, 0.39374929963827154, 0.39370964804819425, 0.39366984465534643,
    0.39362988944447214, 0.39358978240025355, 0.39354952350731154, 0.39350911275020495,
    0.3934685501134312, 0.39342783558142574, 0.39338696913856236, 0.39334595076915296,
    0.39330478045744754, 0.3932634581876341, 0.3932219839438388, 0.3931803577101257,
    0.39313857947049674, 0.393096649208892, 0.39305456690918894, 0.3930123325552033,
    0.3929699461306883, 0.39292740761933503, 0.39288471700477207, 0.3928418742705658,
    0.39279887940022007, 0.3927557323771762, 0.39271243318481325, 0.3926689818064474,
    0.39262537822533244, 0.39258162242465944, 0.3925377143875567, 0.3924936540970899,
    0.3924494415362618, 0.3924050766880125, 0.3923605595352189, 0.39231589006069534,
    0.3922710682471929, 0.39222609407739967, 0.3921809675339407, 0.39213568859937803,
    0.3920902572562103, 0.392044673486873, 0.3919989372737384, 0.3919530485991154,
    0.39190700744524953, 0.3918608137943229, 0.3918144676284542, 0.39176796892969845,
    0.39172131768004714, 0.3916745138614283, 0.3916275574557061, 0.39158044844468104,
    0.39153318681008986, 0.3914857725336054, 0.39143820559683673, 0.3913904859813289,
    0.391342613668563, 0.39129458863995614, 0.39124641087686124, 0.39119808036056714,
    0.3911495970722984, 0.3911009609932155, 0.3910521721044145, 0.3910032303869272,
    0.3909541358217208, 0.3909048883896982, 0.3908554880716978, 0.39080593484849335,
    0.390756228700794, 0.3907063696092443, 0.3906563575544239, 0.39060619251684786,
    0.39055587447696627, 0.39050540341516427, 0.39045477931176226, 0.3904040021470154,
    0.390353071901114, 0.390301988554183, 0.3902507520862824, 0.39019936247740683,
    0.3901478197074857, 0.390096123756383, 0.3900442746038973, 0.38999227222976185,
    0.38994011661364425, 0.3898878077351466, 0.3898353455738052, 0.3897827301090909,
    0.38972996132040866, 0.3896770391870977, 0.3896239636884311, 0.3895707348036164,
    0.38951735251179503, 0.3894638167920421, 0.389410127623367, 0.3893562849847127,
    0.38930228885495605, 0.3892481392129076, 0.38919383603731145, 0.3891393793068454,
    0.38908476900012073, 0.3890300050956822, 0.388975087572008, 0.3889200164075096,
    0.3888647915805318, 0.3888094130693526, 0.3887538808521832, 0.3886981949071677,
    0.38864235521238355, 0.38858636174584094, 0.3885302144854829, 0.3884739134091857,
    0.3884174584947578, 0.3883608497199408, 0.3883040870624088, 0.3882471704997686,
    0.3881901000095593, 0.38813287556925263, 0.38807549715625267, 0.3880179647478958,
    0.3879602783214506, 0.38790243785411793, 0.38784444332303075, 0.38778629470525405,
    0.38772799197778496, 0.3876695351175522, 0.3876109241014168, 0.3875521589061711,
    0.38749323950853953, 0.387434165885178, 0.38737493801267403, 0.3873155558675468,
    0.3872560194262466, 0.3871963286651555, 0.38713648356058666, 0.3870764840887845,
    0.3870163302259246, 0.3869560219481137, 0.3868955592313895, 0.3868349420517209,
    0.38677417038500733, 0.3867132442070792, 0.3866521634936978, 0.38659092822055496,
    0.3865295383632731, 0.38646799389740527, 0.3864062947984349, 0.3863444410417759,
    0.3862824326027724, 0.38622026945669885, 0.3861579515787599, 0.38609547894409013,
    0.38603285152775446, 0.3859700693047474, 0.3859071322499937, 0.3858440403383475,
    0.38578079354459316, 0.3857173918434442, 0.3856538352095442, 0.38559012361746586,
    0.3855262570417115, 0.3854622354567128, 0.38539805883683065, 0.38533372715635517,
    0.38526924038950566, 0.3852045985104304, 0.3851398014932066, 0.3850748493118405,
    0.3850097419402672, 0.38494447935235027, 0.38487906152188217, 0.3848134884225839,
    0.384747760028105, 0.3846818763120233, 0.38461583724784515, 0.38454964280900505,
    0.3844832929688657, 0.38441678770071797, 0.38435012697778076, 0.3842833107732009,
    0.384216339060053, 0.3841492118113396, 0.38408192899999094, 0.3840144905988647,
    0.3839468965807464, 0.3838791469183487, 0.38381124158431185, 0.38374318055120343,
    0.3836749637915181, 0.38360659127767766, 0.383538062982031, 0.38346937887685406,
    0.3834005389343495, 0.3833315431266469, 0.38326239142580254, 0.3831930838037992,
    0.38312362023254637, 0.3830540006838799, 0.382984225129562, 0.38291429354128126,
    0.3828442058906523, 0.38277396214921616, 0.3827035622884396, 0.3826330062797154,
    0.38256229409436227, 0.38249142570362465, 0.38242040107867264, 0.38234922019060186,
    0.38227788301043364, 0.3822063895091145, 0.38213473965751643, 0.3820629334264366,
    0.3819909707865972, 0.38191885170864576, 0.38184657616315454, 0.3817741441206208,
    0.3817015555514664, 0.38162881042603813, 0.38155590871460726, 0.38148285038736957,
    0.3814096354144453, 0.3813362637658789, 0.3812627354116393, 0.3811890503216193,
    0.38111520846563585, 0.3810412098134299, 0.38096705433466627, 0.3808927419989334,
    0.3808182727757436, 0.38074364663453264, 0.3806688635446598, 0.38059392347540766,
    0.3805188263959823, 0.38044357227551273, 0.3803681610830514, 0.3802925927875734,
    0.38021686735797694, 0.38014098476308306, 0.38006494497163534, 0.3799887479523002,
    0.37991239367366636, 0.3798358821042451, 0.3797592132124701, 0.3796823869666969,
    0.37960540333520365, 0.3795282622861901, 0.3794509637877782, 0.37937350780801166,
    0.37929589431485583, 0.3792181232761977, 0.37914019465984583, 0.3790621084335302,
    0.37898386456490213, 0.3789054630215341, 0.3788269037709197, 0.3787481867804736,
    0.37866931201753123, 0.37859027944934903, 0.378511089043104, 0.3784317407658937,
    0.3783522345847364, 0.3782725704665705, 0.3781927483782548, 0.3781127682865683,
    0.3780326301582101, 0.3779523339597991, 0.3778718796578742, 0.3777912672188941,
    0.377710496609237, 0.37762956779520074, 0.3775484807430025, 0.37746723541877886,
    0.37738583178858565, 0.37730426981839765, 0.3772225494741088, 0.3771406707215319,
    0.37705863352639846, 0.37697643785435864, 0.3768940836709812, 0.37681157094175344,
    0.37672889963208084, 0.37664606970728715, 0.3765630811326143, 0.3764799338732221,
    0.37639662789418843, 0.3763131631605087, 0.3762295396370962, 0.3761457572887817,
    0.3760618160803133, 0.3759777159763565, 0.37589345694149406, 0.37580903894022577,
    0.3757244619369684, 0.3756397258960555, 0.3755548307817375, 0.3754697765581814,
    0.3753845631894707, 0.3752991906396053, 0.3752136588725013, 0.3751279678519911,
    0.37504211754182304, 0.3749561079056614, 0.37486993890708625, 0.37478361050959336,
    0.374697122676594, 0.374610475371415, 0.37452366855729846, 0.37443670219740155,
    0.3743495762547967, 0.3742622906924713, 0.37417484547332736, 0.3740872405601818,
    0.37399947591576604, 0.37391155150272604, 0.37382346728362204, 0.3737352232209285,
    0.37364681927703397, 0.3735582554142411, 0.3734695315947661, 0.3733806477807391,
    0.3732916039342039, 0.37320240001711763, 0.37311303599135065, 0.37302351181868687,
    0.3729338274608229, 0.37284398287936854, 0.3727539780358464, 0.37266381289169176,
    0.37257348740825247, 0.3724830015467887, 0.3723923552684732, 0.3723015485343907,
    0.3722105813055379, 0.3721194535428238, 0.3720281652070687, 0.37193671625900493,
    0.3718451066592761, 0.37175333636843744, 0.37166140534695513, 0.37156931355520684,
    0.3714770609534809, 0.3713846475019767, 0.37129207316080426, 0.37119933788998427,
    0.37110644164944767, 0.37101338439903603, 0.3709201660985008, 0.3708267867075037,
    0.3707332461856161, 0.3706395444923193, 0.3705456815870043, 0.3704516574289714,
    0.3703574719774303, 0.37026312519150006, 0.3701686170302086, 0.37007394745249295,
    0.36997911641719866, 0.3698841238830803, 0.3697889698088006, 0.3696936541529309,
    0.36959817687395063, 0.36950253793024723, 0.36940673728011625, 0.369310774881761,
    0.36921465069329223, 0.3691183646727285, 0.36902191677799545, 0.368925306966926,
    0.3688285351972603, 0.3687316014266452, 0.36863450561263444, 0.36853724771268825,
    0.3684398276841736, 0.3683422454843634, 0.36824450107043716, 0.36814659439948005,
    0.3680485254284833, 0.3679502941143438, 0.3678519004138642, 0.36775334428375217,
    0.3676546256806211, 0.3675557445609892, 0.3674567008812798, 0.3673574945978209,
    0.36725812566684535, 0.36715859404449025, 0.36705889968679734, 0.36695904254971234,
    0.36685902258908515, 0.36675883976066936, 0.3666584940201225, 0.3665579853230056,
    0.36645731362478307, 0.3663564788808225, 0.3662554810463947, 0.3661543200766734,
    0.3660529959267352, 0.36595150855155895, 0.36584985790602637, 0.3657480439449213,
    0.3656460666229296, 0.3655439258946394, 0.3654416217145403, 0.3653391540370238,
    0.3652365228163828, 0.3651337280068115, 0.3650307695624051, 0.3649276474371601,
    0.36482436158497367, 0.3647209119596435, 0.364617298514868, 0.36451352120424585,
    0.3644095799812757, 0.3643054747993564, 0.36420120561178654, 0.36409677237176424,
    0.3639921750323874, 0.3638874135466529, 0.36378248786745687, 0.3636773979475945,
    0.3635721437397597, 0.36346672519654494, 0.3633611422704412, 0.3632553949138378,
    0.363149483079022, 0.3630434067181791, 0.3629371657833921, 0.36283076022664157,
    0.36272418999980555, 0.3626174550546592, 0.36251055534287474, 0.36240349081602136,
    0.3622962614255648, 0.3621888671228673, 0.3620813078591876, 0.36197358358568044,
    0.36186569425339643, 0.36175763981328224, 0.3616494202161798, 0.36154103541282684,
    0.361432485353856, 0.3613237699897952, 0.36121488927106704, 0.3611058431479889,
    0.3609966315707726, 0.36088725448952447, 0.36077771185424456, 0.3606680036148273,
    0.36055812972106055, 0.3604480901226259, 0.3603378847690983, 0.3602275136099457,
    0.36011697659452924, 0.36000627367210286, 0.359895404791813, 0.35978436990269846,
    0.35967316895369045, 0.35956180189361214, 0.35945026867117846, 0.3593385692349961,
    0.359226703533563, 0.35911467151526855, 0.3590024731283932, 0.35889010832110807,
    0.358777577041475, 0.3586648792374465, 0.358552014856865, 0.35843898384746326,
    0.35832578615686383, 0.3582124217325788, 0.3580988905220099, 0.357985192472448,
    0.357871327531073, 0.3577572956449538, 0.3576430967610478, 0.3575287308262008,
    0.35741419778714706, 0.35729949759050866, 0.3571846301827956, 0.3570695955104055,
    0.3569543935196234, 0.3568390241566213, 0.3567234873674585, 0.35660778309808105,
    0.3564919112943214, 0.3563758719018984, 0.35625966486641714, 0.35614329013336854,
    0.35602674764812936, 0.3559100373559617, 0.3557931592020131, 0.3556761131313161,
    0.35555889908878807, 0.355441517019231, 0.3553239668673315, 0.3552062485776602,
    0.35508836209467165, 0.3549703073627044, 0.3548520843259804, 0.3547336929286049,
    0.3546151331145663, 0.3544964048277359, 0.3543775080118676, 0.3542584426105978,
    0.3541392085674451, 0.3540198058258099, 0.35390023432897466, 0.3537804940201031,
    0.35366058484224044, 0.3535405067383129, 0.35342025965112744, 0.3532998435233718,
    0.353179258297614, 0.3530585039163022, 0.35293758032176464, 0.3528164874562089,
    0.3526952252617225, 0.3525737936802717, 0.35245219265370203, 0.3523304221237377,
    0.3522084820319814, 0.3520863723199142, 0.3519640929288949, 0.3518416438001606,
    0.3517190248748254, 0.35159623609388113, 0.35147327739819656, 0.3513501487285172,
    0.3512268500254653, 0.3511033812295392, 0.3509797422811137, 0.3508559331204393,
    0.3507319536876419, 0.350607803922723, 0.3504834837655592, 0.3503589931559019,
    0.3502343320333771, 0.35010950033748517, 0.34998449800760073, 0.34985932498297206,
    0.34973398120272114, 0.3496084666058433, 0.34948278113120707, 0.34935692471755353,
    0.3492308973034967, 0.3491046988275228, 0.34897832922799005, 0.3488517884431284,
    0.3487250764110397, 0.3485981930696969, 0.3484711383569438, 0.3483439122104954,
    0.3482165145679367, 0.3480889453667233, 0.3479612045441807, 0.3478332920375041,
    0.3477052077837583, 0.34757695171987685, 0.3474485237826627, 0.34731992390878713,
    0.34719115203478995, 0.34706220809707905, 0.3469330920319301, 0.34680380377548636,
    0.3466743432637584, 0.3465447104326238, 0.34641490521782675, 0.3462849275549781,
    0.3461547773795547, 0.34602445462689946, 0.34589395923222077, 0.34576329113059245,
    0.34563245025695344, 0.34550143654610727, 0.34537024993272214, 0.3452388903513304,
    0.34510735773632834, 0.34497565202197594, 0.3448437731423964, 0.3447117210315761,
    0.3445794956233642, 0.34444709685147235, 0.3443145246494743, 0.34418177895080593,
    0.34404885968876436, 0.3439157667965085, 0.3437825002070579, 0.3436490598532931,
    0.34351544566795483, 0.34338165758364425, 0.34324769553282214, 0.3431135594478089,
    0.3429792492607841, 0.3428447649037864, 0.3427101063087129, 0.3425752734073192,
    0.34244026613121886, 0.34230508441188306, 0.3421697281806406, 0.3420341973686773,
    0.34189849190703564, 0.34176261172661476, 0.34162655675816994, 0.3414903269323123,
    0.3413539221795085, 0.34121734243008045, 0.34108058761420496, 0.34094365766191354,
    0.34080655250309183, 0.34066927206747966, 0.3405318162846702, 0.3403941850841103,
    0.34025637839509953, 0.3401183961467903, 0.33998023826818735, 0.3398419046881474,
    0.339703395335379, 0.33956471013844197, 0.3394258490257472, 0.3392868119255564,
    0.3391475987659815, 0.33900820947498467, 0.33886864398037764, 0.3387289022098217,
    0.33858898409082716, 0.33844888955075286, 0.3383086185168063, 0.33816817091604295,
    0.33802754667536583, 0.33788674572152544, 0.3377457679811193, 0.3376046133805917,
    0.3374632818462331, 0.33732177330418, 0.33718008768041463, 0.3370382249007643,
    0.33689618489090156, 0.3367539675763433, 0.3366115728824508, 0.33646900073442915,
    0.33632625105732694, 0.33618332377603605, 0.33604021881529117, 0.3358969360996693,
    0.3357534755535897, 0.3356098371013133, 0.3354660206669424, 0.3353220261744204,
    0.3351778535475312, 0.3350335027098992, 0.3348889735849884, 0.3347442660961028,
    0.33459938016638513, 0.33445431571881723, 0.3343090726762192, 0.3341636509612493,
    0.33401805049640343, 0.33387227120401486, 0.33372631300625377, 0.3335801758251268,
    0.33343385958247684, 0.3332873641999828, 0.3331406895991585, 0.33299383570135316,
    0.33284680242775067, 0.33269958969936886, 0.3325521974370597, 0.3324046255615086,
    0.332256873993234, 0.33210894265258695, 0.33196083145975086, 0.33181254033474117,
    0.33166406919740465, 0.33151541796741923, 0.33136658656429363, 0.33121757490736675,
    0.3310683829158075, 0.3309190105086141, 0.3307694576046141, 0.33061972412246365,
    0.3304698099806471, 0.33031971509747676, 0.33016943939109233, 0.3300189827794607,
    0.32986834518037506, 0.32971752651145525, 0.3295665266901465, 0.3294153456337198,
    0.32926398325927086, 0.3291124394837198, 0.3289607142238112, 0.328808807396113,
    0.3286567189170167, 0.3285044487027364, 0.3283519966693086, 0.3281993627325919,
    0.32804654680826645, 0.32789354881183336, 0.32774036865861456, 0.32758700626375215,
    0.3274334615422079, 0.3272797344087632, 0.32712582477801805, 0.32697173256439116,
    0.3268174576821191, 0.3266630000452561, 0.3265083595676735, 0.32635353616305923,
    0.3261985297449176, 0.32604334022656856, 0.32588796752114735, 0.32573241154160415,
    0.3255766722007035, 0.325420749411024, 0.32526464308495745, 0.32510835313470887,
    0.3249518794722957, 0.3247952220095477, 0.3246383806581059, 0.32448135532942274,
    0.32432414593476105, 0.32416675238519416, 0.3240091745916049, 0.32385141246468535,
    0.32369346591493653, 0.3235353348526675, 0.3233770191879952, 0.32321851883084396,
    0.32305983369094476, 0.3229009636778351, 0.3227419087008581, 0.3225826686691625,
    0.3224232434917016, 0.3222636330772333, 0.3221038373343193, 0.3219438561713245,
    0.32178368949641684, 0.3216233372175666, 0.3214627992425458, 0.32130207547892786,
    0.3211411658340871, 0.3209800702151981, 0.3208187885292352, 0.320657320682972,
    0.3204956665829812, 0.32033382613563327, 0.3201717992470968, 0.3200095858233375,
    0.3198471857701176, 0.31968459899299567, 0.3195218253973259, 0.3193588648882575,
    0.3191957173707342, 0.3190323827494941, 0.3188688609290683, 0.3187051518137813,
    0.3185412553077498, 0.3183771713148823, 0.3182128997388788, 0.31804844048323,
    0.31788379345121687, 0.3177189585459101, 0.3175539356701693, 0.31738872472664287,
    0.31722332561776717, 0.31705773824576594, 0.31689196251264995, 0.31672599832021614,
    0.31655984557004724, 0.3163935041635113, 0.3162269740017609, 0.31606025498573265,
    0.3158933470161465, 0.3157262499935057, 0.31555896381809545, 0.3153914883899827,
    0.3152238236090157, 0.3150559693748232, 0.314887925586814, 0.31471969214417606,
    0.3145512689458763, 0.31438265589065983, 0.31421385287704934, 0.3140448598033444,
    0.31387567656762116, 0.3137063030677314, 0.3135367392013021, 0.3133669848657349,
    0.3131970399582053, 0.3130269043756621, 0.31285657801482697, 0.31268606077219363,
    0.3125153525440272, 0.31234445322636356, 0.31217336271500923, 0.3120020809055398,
    0.3118306076933003, 0.3116589429734038, 0.31148708664073105, 0.31131503858993004,
    0.31114279871541506, 0.3109703669113661, 0.31079774307172847, 0.3106249270902118,
    0.31045191886028944, 0.31027871827519826, 0.3101053252279372, 0.3099317396112674,
    0.309757961317711, 0.3095839902395506, 0.3094098262688288, 0.3092354692973473,
    0.30906091921666634, 0.3088861759181039, 0.30871123929273525, 0.30853610923139196,
    0.30836078562466146, 0.30818526836288634, 0.30800955733616353, 0.3078336524343436,
    0.3076575535470302, 0.3074812605635794, 0.30730477337309864, 0.3071280918644465,
    0.3069512159262316, 0.3067741454468122, 0.3065968803142953, 0.3064194204165357,
    0.306241765641136, 0.30606391587544507, 0.30588587100655784, 0.30570763092131437,
    0.30552919550629914, 0.30535056464784044, 0.30517173823200927, 0.30499271614461915,
    0.30481349827122495, 0.30463408449712226, 0.3044544747073468, 0.30427466878667336,
    0.30409466661961526, 0.30391446809042366, 0.30373407308308653, 0.3035534814813281,
    0.3033726931686081, 0.30319170802812084, 0.30301052594279454, 0.3028291467952905,
    0.30264757046800245, 0.3024657968430555, 0.3022838258023058, 0.30210165722733906,
    0.30191929099947057, 0.3017367269997438, 0.30155396510892973, 0.3013710052075263,
    0.30118784717575725, 0.3010044908935716, 0.30082093624064277, 0.30063718309636733,
    0.3004532313398651, 0.3002690808499774, 0.30008473150526666, 0.2999001831840156,
    0.2997154357642264, 0.2995304891236196, 0.2993453431396336, 0.29915999768942364,
    0.29897445264986083, 0.2987887078975317, 0.2986027633087368, 0.2984166187594904,
    0.2982302741255191, 0.29804372928226136, 0.2978569841048665, 0.29767003846819373,
    0.2974828922468113, 0.2972955453149959, 0.2971079975467313, 0.2969202488157078,
    0.29673229899532116, 0.296544147958672, 0.29635579557856445, 0.2961672417275055,
    0.2959784862777043, 0.29578952910107065, 0.2956003700692147, 0.2954110090534457,
    0.2952214459247712, 0.2950316805538959, 0.2948417128112211, 0.2946515425668435,
    0.29446116969055425, 0.29427059405183803, 0.2940798155198722, 0.29388883396352583,
    0.2936976492513586, 0.29350626125161994, 0.2933146698322481, 0.2931228748608691,
    0.2929308762047958, 0.29273867373102697, 0.2925462673062461, 0.2923536567968208,
    0.2921608420688013, 0.29196782298791985, 0.2917745994195896, 0.2915811712289036,
    0.29138753828063374, 0.29119370043922976, 0.2909996575688183, 0.2908054095332017,
    0.29061095619585725, 0.2904162974199359, 0.29022143306826137, 0.290026363003329,
    0.28983108708730476, 0.2896356051820244, 0.289439917148992, 0.28924402284937906,
    0.28904792214402364, 0.2888516148934291, 0.288655100957763, 0.2884583801968561,
    0.28826145247020135, 0.28806431763695256, 0.2878669755559235, 0.28766942608558677,
    0.28747166908407273, 0.2872737044091683, 0.2870755319183157, 0.28687715146861187,
    0.28667856291680677, 0.28647976611930237, 0.2862807609321519, 0.28608154721105816,
    0.2858821248113729, 0.2856824935880951, 0.2854826533958704, 0.2852826040889896,
    0.2850823455213874, 0.28488187754664157, 0.28468120001797154, 0.28448031278823716,
    0.2842792157099378, 0.2840779086352109, 0.2838763914158307, 0.2836746639032074,
    0.2834727259483857, 0.2832705774020434, 0.2830682181144908, 0.2828656479356686,
    0.28266286671514745, 0.2824598743021263, 0.28225667054543124, 0.2820532552935143,
    0.2818496283944522, 0.28164578969594484, 0.28144173904531455, 0.2812374762895042,
    0.28103300127507636, 0.28082831384821194, 0.28062341385470874, 0.2804183011399803,
    0.28021297554905455, 0.2800074369265724, 0.2798016851167866, 0.27959571996356036,
    0.27938954131036586, 0.2791831490002833, 0.27897654287599905, 0.27876972277980466,
    0.27856268855359545, 0.27835544003886903, 0.2781479770767242, 0.27794029950785903,
    0.27773240717257014, 0.27752429991075095, 0.2773159775618902, 0.2771074399650708,
    0.27689868695896835, 0.2766897183818497, 0.2764805340715713, 0.2762711338655784,
    0.27606151760090275, 0.27585168511416197, 0.2756416362415576, 0.27543137081887376,
    0.2752208886814758, 0.27501018966430874, 0.2747992736018957, 0.2745881403283367,
    0.27437678967730694, 0.27416522148205513, 0.27395343557540247, 0.2737414317897408,
    0.273529209957031, 0.2733167699088018, 0.273104111476148, 0.27289123448972896,
    0.2726781387797671, 0.27246482417604617, 0.2722512905079101, 0.27203753760426086,
    0.27182356529355733, 0.2716093734038135, 0.2713949617625971, 0.2711803301970274,
    0.27096547853377445, 0.27075040659905675, 0.27053511421863996, 0.2703196012178352,
    0.27010386742149745, 0.26988791265402384, 0.26967173673935174, 0.26945533950095774,
    0.26923872076185523, 0.26902188034459323, 0.26880481807125445, 0.2685875337634536,
    0.26837002724233594, 0.268152298328575, 0.2679343468423715, 0.2677161726034511,
    0.26749777543106296, 0.26727915514397776, 0.26706031156048626, 0.2668412444983971,
    0.2666219537750352, 0.26640243920724016, 0.2661827006113643, 0.2659627378032706,
    0.26574255059833146, 0.2655221388114261, 0.2653015022569396, 0.2650806407487602,
    0.26485955410027806, 0.2646382421243831, 0.2644167046334631, 0.26419494143940214,
    0.26397295235357815, 0.2637507371868616, 0.263528295749613, 0.2633056278516815,
    0.2630827333024026, 0.26285961191059637, 0.26263626348456537, 0.2624126878320929,
    0.2621888847604405, 0.26196485407634684, 0.2617405955860248, 0.2615161090951601,
    0.261291394408909, 0.26106645133189615, 0.260841279668213, 0.2606158792214152,
    0.2603902497945209, 0.2601643911900086, 0.25993830320981504, 0.25971198565533293,
    0.2594854383274092, 0.2592586610263427, 0.25903165355188185, 0.2588044157032229,
    0.2585769472790074, 0.2583492480773203, 0.25812131789568776, 0.25789315653107486,
    0.25766476377988334, 0.2574361394379495, 0.257207283300542, 0.2569781951623594,
    0.25674887481752834, 0.2565193220596009, 0.25628953668155224, 0.25605951847577896,
    0.2558292672340959, 0.25559878274773457, 0.2553680648073405, 0.25513711320297094,
    0.25490592772409243, 0.25467450815957865, 0.25444285429770785, 0.2542109659261606,
    0.25397884283201727, 0.25374648480175566, 0.25351389162124865, 0.2532810630757616,
    0.25304799894995006, 0.25281469902785714, 0.2525811630929113, 0.25234739092792347,
    0.25211338231508473, 0.251879137035964, 0.2516446548715051, 0.25140993560202457,
    0.2511749790072087, 0.2509397848661113, 0.25070435295715104, 0.2504686830581087,
    0.2502327749461247, 0.24999662839769632, 0.249760243188675, 0.24952361909426413,
    0.24928675588901564, 0.24904965334682785, 0.2488123112409426, 0.24857472934394248,
    0.24833690742774805, 0.24809884526361525, 0.24786054262213233, 0.24762199927321743,
    0.24738321498611537, 0.24714418952939515, 0.24690492267094702, 0.24666541417797946,
    0.2464256638170165, 0.24618567135389474, 0.24594543655376047, 0.24570495918106675,
    0.24546423899957034, 0.245223275772329, 0.24498206926169833, 0.2447406192293287,
    0.24449892543616242, 0.2442569876424307, 0.24401480560765043, 0.24377237909062136,
    0.24352970784942268, 0.2432867916414103, 0.2430436302232135, 0.24280022335073187,
    0.24255657077913204, 0.24231267226284464, 0.24206852755556116, 0.2418241364102305,
    0.2415794985790559, 0.2413346138134917, 0.24108948186423998, 0.24084410248124738,
    0.24059847541370177, 0.24035260041002882, 0.2401064772178886, 0.2398601055841726,
    0.23961348525499984, 0.2393666159757138, 0.2391194974908787, 0.23887212954427656,
    0.23862451187890293, 0.23837664423696422, 0.2381285263598736, 0.2378801579882479,
    0.23763153886190366, 0.2373826687198538, 0.23713354730030384, 0.23688417434064848,
    0.2366345495774678, 0.23638467274652367, 0.2361345435827561, 0.23588416182027933,
    0.2356335271923783, 0.23538263943150475, 0.23513149826927365, 0.23488010343645904,
    0.2346284546629905, 0.2343765516779492, 0.23412439420956413, 0.2338719819852078,
    0.23361931473139289, 0.2333663921737678, 0.23311321403711316, 0.2328597800453372,
    0.2326060899214723, 0.23235214338767068, 0.2320979401652003, 0.2318434799744409,
    0.23158876253487976, 0.23133378756510756, 0.23107855478281425, 0.23082306390478463,
    0.23056731464689445, 0.23031130672410596, 0.23005503985046366, 0.22979851373908994,
    0.2295417281021807, 0.22928468265100116, 0.22902737709588128, 0.22876981114621137,
    0.22851198451043767, 0.2282538968960579, 0.2279955480096166, 0.22773693755670077,
    0.22747806524193503, 0.22721893076897748, 0.2269595338405145, 0.22669987415825651,
    0.2264399514229331, 0.22617976533428824, 0.22591931559107573, 0.22565860189105427,
    0.22539762393098256, 0.22513638140661463, 0.22487487401269493, 0.2246131014429533,
    0.22435106339010005, 0.22408875954582105, 0.22382618960077275, 0.22356335324457688,
    0.22330025016581576, 0.2230368800520268, 0.2227732425896975, 0.22250933746426046,
    0.22224516436008795, 0.2219807229604866, 0.2217160129476921, 0.22145103400286428,
    0.22118578580608123, 0.22092026803633413, 0.22065448037152174, 0.22038842248844517,
    0.220122094062802, 0.21985549476918104, 0.21958862428105655, 0.21932148227078277,
    0.21905406840958808, 0.21878638236756945, 0.2185184238136866, 0.21825019241575636,
    0.21798168784044666, 0.21771290975327076, 0.21744385781858142, 0.21717453169956488,
    0.2169049310582348, 0.21663505555542642, 0.2163649048507903, 0.21609447860278638,
    0.2158237764686778, 0.21555279810452452, 0.2152815431651772, 0.21501001130427108,
    0.21473820217421932, 0.214466115426207, 0.2141937507101844, 0.21392110767486053,
    0.21364818596769702, 0.21337498523490103, 0.213101505121419, 0.21282774527092985,
    0.21255370532583834, 0.21227938492726825, 0.21200478371505582, 0.21172990132774253,
    0.21145473740256845, 0.2111792915754653, 0.21090356348104944, 0.2106275527526146,
    0.21035125902212523, 0.2100746819202089, 0.20979782107614936, 0.2095206761178793,
    0.20924324667197278, 0.20896553236363827, 0.20868753281671085, 0.208409247653645,
    0.20813067649550696, 0.2078518189619673, 0.20757267467129284, 0.2072932432403397,
    0.2070135242845448, 0.2067335174179185, 0.20645322225303667, 0.20617263840103264,
    0.2058917654715893, 0.20561060307293103, 0.20532915081181555, 0.20504740829352597,
    0.20476537512186224, 0.2044830508991331, 0.20420043522614764, 0.20391752770220684,
    0.2036343279250951, 0.20335083549107189, 0.20306704999486277, 0.2027829710296511,
    0.20249859818706897, 0.20221393105718866, 0.2019289692285135, 0.20164371228796912,
    0.2013581598208944, 0.20107231141103227, 0.20078616664052062, 0.20049972508988323,
    0.2002129863380202, 0.19992594996219853, 0.1996386155380431, 0.19935098263952683,
    0.19906305083896095, 0.19877481970698568, 0.1984862888125603, 0.19819745772295325,
    0.19790832600373237, 0.19761889321875478, 0.197329158930157, 0.1970391226983446,
    0.19674878408198204, 0.1964581426379825, 0.19616719792149728, 0.1958759494859056,
    0.1955843968828036, 0.19529253966199425, 0.19500037737147613, 0.194707909557433,
    0.19441513576422248, 0.19412205553436554, 0.19382866840853494, 0.1935349739255445,
    0.19324097162233755, 0.19294666103397556, 0.1926520416936268, 0.19235711313255488,
    0.19206187488010684, 0.19176632646370156, 0.19147046740881812, 0.19117429723898346,
    0.1908778154757607, 0.1905810216387367, 0.19028391524551008, 0.18998649581167887,
    0.18968876285082786, 0.18939071587451617, 0.18909235439226468, 0.18879367791154308,
    0.1884946859377573, 0.1881953779742361, 0.18789575352221835, 0.18759581208083967,
    0.1872955531471191, 0.1869949762159458, 0.1866940807800653, 0.186392866330066,
    0.1860913323543654, 0.18578947833919607, 0.1854873037685917, 0.185184808124373,
    0.1848819908861334, 0.1845788515312246, 0.1842753895347421, 0.18397160436951057,
    0.1836674955060692, 0.1833630624126565, 0.18305830455519553, 0.18275322139727854,
    0.18244781240015187, 0.18214207702270033, 0.18183601472143177, 0.1815296249504612,
    0.18122290716149508, 0.18091586080381525, 0.18060848532426282, 0.1803007801672219,
    0.179992744774603, 0.1796843785858267, 0.17937568103780674, 0.17906665156493315,
    0.17875728959905526, 0.17844759456946457, 0.17813756590287705, 0.17782720302341626,
    0.17751650535259492, 0.1772054723092976, 0.17689410330976255, 0.17658239776756351,
    0.17627035509359143, 0.17595797469603588, 0.17564525598036632, 0.17533219834931346,
    0.17501880120285004, 0.17470506393817153, 0.174390985949677, 0.17407656662894927,
    0.17376180536473537, 0.17344670154292635, 0.17313125454653738, 0.17281546375568715,
    0.1724993285475776, 0.17218284829647304, 0.17186602237367912, 0.17154885014752194,
    0.17123133098332646, 0.1709134642433952, 0.17059524928698638, 0.17027668547029182,
    0.169957772146415, 0.1696385086653484, 0.1693188943739512, 0.1689989286159261,
    0.16867861073179655, 0.1683579400588832, 0.16803691593128053, 0.1677155376798331,
    0.16739380463211145, 0.16707171611238802, 0.16674927144161242, 0.16642646993738694,
    0.16610331091394143, 0.16577979368210818, 0.16545591754929637, 0.1651316818194664,
    0.1648070857931038, 0.16448212876719281, 0.16415681003519028, 0.16383112888699847,
    0.16350508460893812, 0.16317867648372106, 0.1628519037904225, 0.16252476580445324,
    0.16219726179753127, 0.16186939103765338, 0.16154115278906628, 0.1612125463122375,
    0.16088357086382585, 0.16055422569665198, 0.16022451005966798, 0.15989442319792713,
    0.1595639643525534, 0.15923313276071013, 0.15890192765556885, 0.1585703482662775,
    0.15823839381792856, 0.15790606353152647, 0.15757335662395502, 0.15724027230794432,
    0.15690680979203725, 0.15657296828055567, 0.1562387469735663, 0.15590414506684627,
    0.1555691617518479, 0.15523379621566366, 0.1548980476409904, 0.1545619152060932,
    0.15422539808476887, 0.15388849544630911, 0.1535512064554632, 0.15321353027240014,
    0.1528754660526707, 0.15253701294716848, 0.15219817010209133, 0.15185893665890163,
    0.15151931175428626, 0.1511792945201165, 0.15083888408340695, 0.15049807956627442,
    0.15015688008589606, 0.14981528475446704, 0.14947329267915793, 0.14913090296207135,
    0.14878811470019826, 0.1484449269853737, 0.148101338904232, 0.14775734953816141,
    0.14741295796325846, 0.14706816325028127, 0.1467229644646028, 0.14637736066616355,
    0.14603135090942307, 0.14568493424331164, 0.14533810971118083, 0.14499087635075403,
    0.14464323319407565, 0.1442951792674605, 0.1439467135914416, 0.14359783518071847,
    0.1432485430441039, 0.1428988361844704, 0.14254871359869617, 0.14219817427760995,
    0.14184721720593563, 0.1414958413622359, 0.14114404571885542, 0.14079182924186298,
    0.14043919089099313, 0.14008612961958716, 0.13973264437453306, 0.13937873409620502,
    0.1390243977184019, 0.13866963416828515, 0.1383144423663158, 0.13795882122619055,
    0.13760276965477722, 0.13724628655204935, 0.1368893708110198, 0.13653202131767364,
    0.13617423695090017, 0.13581601658242376, 0.13545735907673428, 0.1350982632910162,
    0.13473872807507684, 0.1343787522712739, 0.13401833471444163, 0.13365747423181634,
    0.13329616964296093, 0.1329344197596879, 0.13257222338598212, 0.13220957931792185,
    0.13184648634359905, 0.1314829432430385, 0.1311189487881158, 0.1307545017424745,
    0.13038960086144138, 0.1300242448919414, 0.1296584325724112, 0.12929216263271084,
    0.1289254337940353, 0.12855824476882372, 0.1281905942606682, 0.12782248096422075,
    0.1274539035650992, 0.1270848607397916, 0.12671535115555957, 0.12634537347033967,
    0.1259749263326441, 0.12560400838145938, 0.1252326182461437, 0.12486075454632295,
    0.12448841589178515, 0.12411560088237314, 0.12374230810787602, 0.12336853614791864,
    0.12299428357184974, 0.12261954893862834, 0.12224433079670817, 0.12186862768392086,
    0.121492438127357, 0.12111576064324532, 0.1207385937368305, 0.12036093590224878,
    0.1199827856224014, 0.11960414136882684, 0.11922500160157043, 0.11884536476905215,
    0.11846522930793257, 0.11808459364297627, 0.11770345618691369, 0.11732181534030013,
    0.11693966949137317, 0.11655701701590732, 0.11617385627706674, 0.11579018562525537,
    0.11540600339796468, 0.11502130791961904, 0.11463609750141848, 0.11425037044117915,
    0.11386412502317077, 0.11347735951795163, 0.11309007218220107, 0.11270226125854879,
    0.11231392497540162, 0.1119250615467673, 0.11153566917207525, 0.1111457460359945,
    0.11075529030824828, 0.11036430014342578, 0.10997277368079042, 0.10958070904408497,
    0.10918810434133336, 0.10879495766463892, 0.1084012670899793, 0.10800703067699766,
    0.10761224646879032, 0.10721691249169055, 0.10682102675504883, 0.1064245872510087,
    0.10602759195427919, 0.10563003882190264, 0.10523192579301886, 0.10483325078862467,
    0.10443401171132913, 0.10403420644510444, 0.10363383285503222, 0.10323288878704495,
    0.10283137206766294, 0.1024292805037261, 0.10202661188212098, 0.10162336396950249,
    0.10121953451201039, 0.10081512123498054, 0.10041012184265065, 0.10000453401786,
    0.09959835542174415, 0.09919158369342301, 0.09878421644968327, 0.09837625128465452,
    0.09796768576947903, 0.09755851745197504, 0.09714874385629328, 0.09673836248256677,
    0.09632737080655375, 0.09591576627927298, 0.0955035463266321, 0.09509070834904836,
    0.09467724972106129, 0.09426316779093803, 0.09384845988026971, 0.0934331232835603,
    0.09301715526780613, 0.09260055307206727, 0.09218331390702925, 0.09176543495455598,
    0.09134691336723286, 0.0909277462679002, 0.09050793074917664, 0.09008746387297212,
    0.08966634266999027, 0.08924456413922004, 0.08882212524741596, 0.088399022928567,
    0.08797525408335348, 0.08755081557859194, 0.08712570424666745, 0.08669991688495302,
    0.0862734502552158, 0.08584630108300985, 0.08541846605705442, 0.08498994182859837,
    0.08456072501076946, 0.08413081217790835, 0.08370019986488697, 0.0832688845664107,
    0.0828368627363038, 0.08240413078677776, 0.08197068508768172, 0.08153652196573505,
    0.08110163770374065, 0.08066602853977929, 0.08022969066638364, 0.07979262022969179,
    0.07935481332857972, 0.0789162660137715, 0.07847697428692695, 0.07803693409970615,
    0.07759614135280957, 0.07715459189499341, 0.07671228152205918, 0.07626920597581682,
    0.07582536094302027, 0.07538074205427464, 0.07493534488291423, 0.07448916494385005,
    0.07404219769238614, 0.07359443852300343, 0.07314588276811007, 0.07269652569675696,
    0.07224636251331755, 0.07179538835613027, 0.07134359829610258, 0.07089098733527502,
    0.07043755040534405, 0.06998328236614207, 0.06952817800407285, 0.0690722320305012,
    0.06861543908009471, 0.06815779370911615, 0.06769929039366424, 0.06723992352786133,
    0.06677968742198559, 0.06631857630054563, 0.06585658430029559, 0.06539370546818786,
    0.06492993375926144, 0.06446526303446333, 0.06399968705839981, 0.06353319949701536,
    0.06306579391519596, 0.06259746377429368, 0.06212820242956947, 0.06165800312755034,
    0.061186859003298046, 0.060714763077584596, 0.06024170825397137, 0.059767687315787396,
    0.05929269292300222, 0.05881671760898901, 0.05833975377717306, 0.05786179369756015,
    0.05738282950313992, 0.056902853186158175, 0.056421856594252175, 0.05593983142644275,
    0.055456769228976285, 0.05497266139100963, 0.0544874991401306, 0.05400127353770576,
    0.05351397547404752, 0.053025595663391524, 0.05253612463867494, 0.05204555274610566,
    0.051553870139512, 0.05106106677446168, 0.05056713240213816, 0.050072056562961646,
    0.04957582857994167, 0.04907843755174675, 0.04857987234547594, 0.04808012158911643,
    0.04757917366366965, 0.04707701669492799, 0.04657363854488194, 0.04606902680273789,
    0.04556316877552295, 0.04505605147825434, 0.04454766162364695, 0.044037985611332334,
    0.04352700951655981, 0.0430147190783486, 0.042501099687057176, 0.04198613637133441,
    0.04146981378441317, 0.04095211618970573, 0.0404330274456556, 0.03991253098979805,
    0.03939060982197776, 0.03886724648666738, 0.038342423054327085, 0.037816121101739916,
    0.03728832169125264, 0.03675900534884638, 0.03622815204095408, 0.03569574114993654,
    0.03516175144811922, 0.03462616107028612, 0.03408894748451558, 0.033550087461235036,
    0.03300955704035951, 0.0324673314963672, 0.03192338530115241, 0.03137769208448167,
    0.03083022459186299, 0.030280954639620362, 0.02972985306694785, 0.029176889684694892,
    0.028622033220612974, 0.02806525126076768, 0.02750651018679359, 0.02694577510863837,
    0.026383009792411524, 0.02581817658291672, 0.025251236320410073, 0.02468214825108642,
    0.024110869930754064, 0.02353735712111486, 0.02296156367802392, 0.022383441431061198,
    0.02180294005371019, 0.021220006923409886, 0.020634586970731804, 0.02004662251694185,
    0.019456053099251136, 0.018862815283157534, 0.018266842461459286, 0.017668064639822158,
    0.017066408209260305, 0.016461795706635904, 0.015854145565419687, 0.015243371860677844,
    0.014629384054850614, 0.01401208675480855, 0.013391379496604506, 0.012767156583359621,
    0.012139307015549768, 0.011507714574368524, 0.010872258152403228, 0.010232812479241703,
    0.009589249475997527, 0.008941440615280351, 0.008289260903794091, 0.007632595521868634,
    0.006971350899435529, 0.006305473386776205, 0.005634981335764731, 0.004960021780021874,
    0.004280974398541893, 0.0035986517757094997, 0.002914710456517407, 0.002232567624149839,
    0.0015596819337494036,
];

/// Stripe containing the left edge of each quantization bucket.
pub static NCELL: [u16; 8961] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1,
    2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4, 4,
    4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6,
    6, 6, 6, 7, 7, 7, 7, 7, 7, 7, 8, 8, 8, 8, 8, 8,
    8, 9, 9, 9, 9, 9, 9, 9, 10, 10, 10, 10, 10, 10, 10, 11,
    11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12, 12, 13, 13, 13, 13,
    13, 13, 13, 14, 14, 14, 14, 14, 14, 15, 15, 15, 15, 15, 15, 15,
    16, 16, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 18, 18, 18,
    18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20, 20,
    21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23,
    23, 23, 24, 24, 24, 24, 24, 24, 25, 25, 25, 25, 25, 25, 26, 26,
    26, 26, 26, 26, 27, 27, 27, 27, 27, 27, 28, 28, 28, 28, 28, 28,
    29, 29, 29, 29, 29, 29, 30, 30, 30, 30, 30, 30, 31, 31, 31, 31,
    31, 31, 32, 32, 32, 32, 32, 32, 33, 33, 33, 33, 33, 34, 34, 34,
    34, 34, 34, 35, 35, 35, 35, 35, 35, 36, 36, 36, 36, 36, 37, 37,
    37, 37, 37, 37, 38, 38, 38, 38, 38, 39, 39, 39, 39, 39, 39, 40,
    40, 40, 40, 40, 40, 41, 41, 41, 41, 41, 42, 42, 42, 42, 42, 43,
    43, 43, 43, 43, 43, 44, 44, 44, 44, 44, 45, 45, 45, 45, 45, 46,
    46, 46, 46, 46, 46, 47, 47, 47, 47, 47, 48, 48, 48, 48, 48, 49,
    49, 49, 49, 49, 50, 50, 50, 50, 50, 50, 51, 51, 51, 51, 51, 52,
    52, 52, 52, 52, 53, 53, 53, 53, 53, 54, 54, 54, 54, 54, 55, 55,
    55, 55, 55, 56, 56, 56, 56, 56, 57, 57, 57, 57, 57, 58, 58, 58,
    58, 58, 59, 59, 59, 59, 59, 60, 60, 60, 60, 60, 61, 61, 61, 61,
    61, 62, 62, 62, 62, 63, 63, 63, 63, 63, 64, 64, 64, 64, 64, 65,
    65, 65, 65, 65, 66, 66, 66, 66, 66, 67, 67, 67, 67, 68, 68, 68,
    68, 68, 69, 69, 69, 69, 69, 70, 70, 70, 70, 71, 71, 71, 71, 71,
    72, 72, 72, 72, 72, 73, 73, 73, 73, 74, 74, 74, 74, 74, 75, 75,
    75, 75, 76, 76, 76, 76, 76, 77, 77, 77, 77, 78, 78, 78, 78, 78,
    79, 79, 79, 79, 80, 80, 80, 80, 80, 81, 81, 81, 81, 82, 82, 82,
    82, 83, 83, 83, 83, 83, 84, 84, 84, 84, 85, 85, 85, 85, 86, 86,
    86, 86, 86, 87, 87, 87, 87, 88, 88, 88, 88, 89, 89, 89, 89, 89,
    90, 90, 90, 90, 91, 91, 91, 91, 92, 92, 92, 92, 93, 93, 93, 93,
    94, 94, 94, 94, 95, 95, 95, 95, 95, 96, 96, 96, 96, 97, 97, 97,
    97, 98, 98, 98, 98, 99, 99, 99, 99, 100, 100, 100, 100, 101, 101, 101,
    101, 102, 102, 102, 102, 103, 103, 103, 103, 104, 104, 104, 104, 105, 105, 105,
    105, 106, 106, 106, 106, 107, 107, 107, 107, 108, 108, 108, 108, 109, 109, 109,
    109, 110, 110, 110, 110, 111, 111, 111, 111, 112, 112, 112, 113, 113, 113, 113,
    114, 114, 114, 114, 115, 115, 115, 115, 116, 116, 116, 116, 117, 117, 117, 117,
    118, 118, 118, 119, 119, 119, 119, 120, 120, 120, 120, 121, 121, 121, 121, 122,
    122, 122, 123, 123, 123, 123, 124, 124, 124, 124, 125, 125, 125, 126, 126, 126,
    126, 127, 127, 127, 127, 128, 128, 128, 129, 129, 129, 129, 130, 130, 130, 130,
    131, 131, 131, 132, 132, 132, 132, 133, 133, 133, 134, 134, 134, 134, 135, 135,
    135, 136, 136, 136, 136, 137, 137, 137, 137, 138, 138, 138, 139, 139, 139, 139,
    140, 140, 140, 141, 141, 141, 141, 142, 142, 142, 143, 143, 143, 144, 144, 144,
    144, 145, 145, 145, 146, 146, 146, 146, 147, 147, 147, 148, 148, 148, 148, 149,
    149, 149, 150, 150, 150, 151, 151, 151, 151, 152, 152, 152, 153, 153, 153, 154,
    154, 154, 154, 155, 155, 155, 156, 156, 156, 157, 157, 157, 157, 158, 158, 158,
    159, 159, 159, 160, 160, 160, 160, 161, 161, 161, 162, 162, 162, 163, 163, 163,
    164, 164, 164, 164, 165, 165, 165, 166, 166, 166, 167, 167, 167, 168, 168, 168,
    169, 169, 169, 169, 170, 170, 170, 171, 171, 171, 172, 172, 172, 173, 173, 173,
    174, 174, 174, 175, 175, 175, 176, 176, 176, 176, 177, 177, 177, 178, 178, 178,
    179, 179, 179, 180, 180, 180, 181, 181, 181, 182, 182, 182, 183, 183, 183, 184,
    184, 184, 185, 185, 185, 186, 186, 186, 187, 187, 187, 188, 188, 188, 189, 189,
    189, 190, 190, 190, 191, 191, 191, 192, 192, 192, 193, 193, 193, 194, 194, 194,
    195, 195, 195, 196, 196, 196, 197, 197, 197, 198, 198, 198, 199, 199, 199, 200,
    200, 200, 201, 201, 201, 202, 202, 202, 203, 203, 203, 204, 204, 204, 205, 205,
    206, 206, 206, 207, 207, 207, 208, 208, 208, 209, 209, 209, 210, 210, 210, 211,
    211, 211, 212, 212, 213, 213, 213, 214, 214, 214, 215, 215, 215, 216, 216, 216,
    217, 217, 217, 218, 218, 219, 219, 219, 220, 220, 220, 221, 221, 221, 222, 222,
    223, 223, 223, 224, 224, 224, 225, 225, 225, 226, 226, 227, 227, 227, 228, 228,
    228, 229, 229, 229, 230, 230, 231, 231, 231, 232, 232, 232, 233, 233, 234, 234,
    234, 235, 235, 235, 236, 236, 237, 237, 237, 238, 238, 238, 239, 239, 240, 240,
    240, 241, 241, 241, 242, 242, 243, 243, 243, 244, 244, 244, 245, 245, 246, 246,
    246, 247, 247, 248, 248, 248, 249, 249, 249, 250, 250, 251, 251, 251, 252, 252,
    253, 253, 253, 254, 254, 254, 255, 255, 256, 256, 256, 257, 257, 258, 258, 258,
    259, 259, 260, 260, 260, 261, 261, 262, 262, 262, 263, 263, 264, 264, 264, 265,
    265, 266, 266, 266, 267, 267, 268, 268, 268, 269, 269, 270, 270, 270, 271, 271,
    272, 272, 272, 273, 273, 274, 274, 274, 275, 275, 276, 276, 276, 277, 277, 278,
    278, 278, 279, 279, 280, 280, 280, 281, 281, 282, 282, 283, 283, 283, 284, 284,
    285, 285, 285, 286, 286, 287, 287, 288, 288, 288, 289, 289, 290, 290, 290, 291,
    291, 292, 292, 293, 293, 293, 294, 294, 295, 295, 296, 296, 296, 297, 297, 298,
    298, 298, 299, 299, 300, 300, 301, 301, 301, 302, 302, 303, 303, 304, 304, 304,
    305, 305, 306, 306, 307, 307, 307, 308, 308, 309, 309, 310, 310, 311, 311, 311,
    312, 312, 313, 313, 314, 314, 314, 315, 315, 316, 316, 317, 317, 318, 318, 318,
    319, 319, 320, 320, 321, 321, 322, 322, 322, 323, 323, 324, 324, 325, 325, 326,
    326, 326, 327, 327, 328, 328, 329, 329, 330, 330, 330, 331, 331, 332, 332, 333,
    333, 334, 334, 335, 335, 335, 336, 336, 337, 337, 338, 338, 339, 339, 340, 340,
    340, 341, 341, 342, 342, 343, 343, 344, 344, 345, 345, 346, 346, 346, 347, 347,
    348, 348, 349, 349, 350, 350, 351, 351, 352, 352, 353, 353, 353, 354, 354, 355,
    355, 356, 356, 357, 357, 358, 358, 359, 359, 360, 360, 361, 361, 361, 362, 362,
    363, 363, 364, 364, 365, 365, 366, 366, 367, 367, 368, 368, 369, 369, 370, 370,
    371, 371, 371, 372, 372, 373, 373, 374, 374, 375, 375, 376, 376, 377, 377, 378,
    378, 379, 379, 380, 380, 381, 381, 382, 382, 383, 383, 384, 384, 385, 385, 386,
    386, 387, 387, 388, 388, 389, 389, 390, 390, 391, 391, 392, 392, 393, 393, 394,
    394, 395, 395, 396, 396, 397, 397, 398, 398, 399, 399, 400, 400, 401, 401, 402,
    402, 403, 403, 404, 404, 405, 405, 406, 406, 407, 407, 408, 408, 409, 409, 410,
    410, 411, 411, 412, 412, 413, 413, 414, 414, 415, 415, 416, 416, 417, 417, 418,
    418, 419, 419, 420, 420, 421, 421, 422, 423, 423, 424, 424, 425, 425, 426, 426,
    427, 427, 428, 428, 429, 429, 430, 430, 431, 431, 432, 432, 433, 433, 434, 435,
    435, 436, 436, 437, 437, 438, 438, 439, 439, 440, 440, 441, 441, 442, 442, 443,
    444, 444, 445, 445, 446, 446, 447, 447, 448, 448, 449, 449, 450, 450, 451, 452,
    452, 453, 453, 454, 454, 455, 455, 456, 456, 457, 458, 458, 459, 459, 460, 460,
    461, 461, 462, 462, 463, 464, 464, 465, 465, 466, 466, 467, 467, 468, 468, 469,
    470, 470, 471, 471, 472, 472, 473, 473, 474, 475, 475, 476, 476, 477, 477, 478,
    478, 479, 480, 480, 481, 481, 482, 482, 483, 483, 484, 485, 485, 486, 486, 487,
    487, 488, 488, 489, 490, 490, 491, 491, 492, 492, 493, 494, 494, 495, 495, 496,
    496, 497, 498, 498, 499, 499, 500, 500, 501, 502, 502, 503, 503, 504, 504, 505,
    506, 506, 507, 507, 508, 508, 509, 510, 510, 511, 511, 512, 512, 513, 514, 514,
    515, 515, 516, 517, 517, 518, 518, 519, 519, 520, 521, 521, 522, 522, 523, 524,
    524, 525, 525, 526, 526, 527, 528, 528, 529, 529, 530, 531, 531, 532, 532, 533,
    534, 534, 535, 535, 536, 537, 537, 538, 538, 539, 539, 540, 541, 541, 542, 542,
    543, 544, 544, 545, 545, 546, 547, 547, 548, 548, 549, 550, 550, 551, 551, 552,
    553, 553, 554, 555, 555, 556, 556, 557, 558, 558, 559, 559, 560, 561, 561, 562,
    562, 563, 564, 564, 565, 565, 566, 567, 567, 568, 569, 569, 570, 570, 571, 572,
    572, 573, 573, 574, 575, 575, 576, 577, 577, 578, 578, 579, 580, 580, 581, 582,
    582, 583, 583, 584, 585, 585, 586, 586, 587, 588, 588, 589, 590, 590, 591, 591,
    592, 593, 593, 594, 595, 595, 596, 597, 597, 598, 598, 599, 600, 600, 601, 602,
    602, 603, 603, 604, 605, 605, 606, 607, 607, 608, 609, 609, 610, 610, 611, 612,
    612, 613, 614, 614, 615, 616, 616, 617, 618, 618, 619, 619, 620, 621, 621, 622,
    623, 623, 624, 625, 625, 626, 627, 627, 628, 629, 629, 630, 630, 631, 632, 632,
    633, 634, 634, 635, 636, 636, 637, 638, 638, 639, 640, 640, 641, 642, 642, 643,
    644, 644, 645, 646, 646, 647, 647, 648, 649, 649, 650, 651, 651, 652, 653, 653,
    654, 655, 655, 656, 657, 657, 658, 659, 659, 660, 661, 661, 662, 663, 663, 664,
    665, 665, 666, 667, 667, 668, 669, 669, 670, 671, 671, 672, 673, 674, 674, 675,
    676, 676, 677, 678, 678, 679, 680, 680, 681, 682, 682, 683, 684, 684, 685, 686,
    686, 687, 688, 688, 689, 690, 690, 691, 692, 693, 693, 694, 695, 695, 696, 697,
    697, 698, 699, 699, 700, 701, 701, 702, 703, 704, 704, 705, 706, 706, 707, 708,
    708, 709, 710, 710, 711, 712, 713, 713, 714, 715, 715, 716, 717, 717, 718, 719,
    719, 720, 721, 722, 722, 723, 724, 724, 725, 726, 726, 727, 728, 729, 729, 730,
    731, 731, 732, 733, 734, 734, 735, 736, 736, 737, 738, 738, 739, 740, 741, 741,
    742, 743, 743, 744, 745, 746, 746, 747, 748, 748, 749, 750, 751, 751, 752, 753,
    753, 754, 755, 756, 756, 757, 758, 758, 759, 760, 761, 761, 762, 763, 763, 764,
    765, 766, 766, 767, 768, 769, 769, 770, 771, 771, 772, 773, 774, 774, 775, 776,
    777, 777, 778, 779, 779, 780, 781, 782, 782, 783, 784, 785, 785, 786, 787, 787,
    788, 789, 790, 790, 791, 792, 793, 793, 794, 795, 796, 796, 797, 798, 798, 799,
    800, 801, 801, 802, 803, 804, 804, 805, 806, 807, 807, 808, 809, 810, 810, 811,
    812, 813, 813, 814, 815, 816, 816, 817, 818, 819, 819, 820, 821, 822, 822, 823,
    824, 825, 825, 826, 827, 828, 828, 829, 830, 831, 831, 832, 833, 834, 834, 835,
    836, 837, 837, 838, 839, 840, 840, 841, 842, 843, 843, 844, 845, 846, 846, 847,
    848, 849, 849, 850, 851, 852, 853, 853, 854, 855, 856, 856, 857, 858, 859, 859,
    860, 861, 862, 862, 863, 864, 865, 866, 866, 867, 868, 869, 869, 870, 871, 872,
    872, 873, 874, 875, 876, 876, 877, 878, 879, 879, 880, 881, 882, 883, 883, 884,
    885, 886, 886, 887, 888, 889, 890, 890, 891, 892, 893, 893, 894, 895, 896, 897,
    897, 898, 899, 900, 900, 901, 902, 903, 904, 904, 905, 906, 907, 908, 908, 909,
    910, 911, 911, 912, 913, 914, 915, 915, 916, 917, 918, 919, 919, 920, 921, 922,
    923, 923, 924, 925, 926, 927, 927, 928, 929, 930, 931, 931, 932, 933, 934, 935,
    935, 936, 937, 938, 939, 939, 940, 941, 942, 943, 943, 944, 945, 946, 947, 947,
    948, 949, 950, 951, 951, 952, 953, 954, 955, 955, 956, 957, 958, 959, 959, 960,
    961, 962, 963, 963, 964, 965, 966, 967, 968, 968, 969, 970, 971, 972, 972, 973,
    974, 975, 976, 976, 977, 978, 979, 980, 981, 981, 982, 983, 984, 985, 985, 986,
    987, 988, 989, 990, 990, 991, 992, 993, 994, 994, 995, 996, 997, 998, 999, 999,
    1000, 1001, 1002, 1003, 1004, 1004, 1005, 1006, 1007, 1008, 1008, 1009, 1010, 1011, 1012, 1013,
    1013, 1014, 1015, 1016, 1017, 1018, 1018, 1019, 1020, 1021, 1022, 1023, 1023, 1024, 1025, 1026,
    1027, 1028, 1028, 1029, 1030, 1031, 1032, 1033, 1033, 1034, 1035, 1036, 1037, 1038, 1038, 1039,
    1040, 1041, 1042, 1043, 1044, 1044, 1045, 1046, 1047, 1048, 1049, 1049, 1050, 1051, 1052, 1053,
    1054, 1054, 1055, 1056, 1057, 1058, 1059, 1060, 1060, 1061, 1062, 1063, 1064, 1065, 1065, 1066,
    1067, 1068, 1069, 1070, 1071, 1071, 1072, 1073, 1074, 1075, 1076, 1077, 1077, 1078, 1079, 1080,
    1081, 1082, 1082, 1083, 1084, 1085, 1086, 1087, 1088, 1088, 1089, 1090, 1091, 1092, 1093, 1094,
    1094, 1095, 1096, 1097, 1098, 1099, 1100, 1100, 1101, 1102, 1103, 1104, 1105, 1106, 1107, 1107,
    1108, 1109, 1110, 1111, 1112, 1113, 1113, 1114, 1115, 1116, 1117, 1118, 1119, 1119, 1120, 1121,
    1122, 1123, 1124, 1125, 1126, 1126, 1127, 1128, 1129, 1130, 1131, 1132, 1133, 1133, 1134, 1135,
    1136, 1137, 1138, 1139, 1139, 1140, 1141, 1142, 1143, 1144, 1145, 1146, 1146, 1147, 1148, 1149,
    1150, 1151, 1152, 1153, 1153, 1154, 1155, 1156, 1157, 1158, 1159, 1160, 1161, 1161, 1162, 1163,
    1164, 1165, 1166, 1167, 1168, 1168, 1169, 1170, 1171, 1172, 1173, 1174, 1175, 1176, 1176, 1177,
    1178, 1179, 1180, 1181, 1182, 1183, 1183, 1184, 1185, 1186, 1187, 1188, 1189, 1190, 1191, 1191,
    1192, 1193, 1194, 1195, 1196, 1197, 1198, 1199, 1199, 1200, 1201, 1202, 1203, 1204, 1205, 1206,
    1207, 1208, 1208, 1209, 1210, 1211, 1212, 1213, 1214, 1215, 1216, 1216, 1217, 1218, 1219, 1220,
    1221, 1222, 1223, 1224, 1225, 1225, 1226, 1227, 1228, 1229, 1230, 1231, 1232, 1233, 1234, 1234,
    1235, 1236, 1237, 1238, 1239, 1240, 1241, 1242, 1243, 1243, 1244, 1245, 1246, 1247, 1248, 1249,
    1250, 1251, 1252, 1253, 1253, 1254, 1255, 1256, 1257, 1258, 1259, 1260, 1261, 1262, 1263, 1263,
    1264, 1265, 1266, 1267, 1268, 1269, 1270, 1271, 1272, 1273, 1273, 1274, 1275, 1276, 1277, 1278,
    1279, 1280, 1281, 1282, 1283, 1283, 1284, 1285, 1286, 1287, 1288, 1289, 1290, 1291, 1292, 1293,
    1294, 1294, 1295, 1296, 1297, 1298, 1299, 1300, 1301, 1302, 1303, 1304, 1305, 1305, 1306, 1307,
    1308, 1309, 1310, 1311, 1312, 1313, 1314, 1315, 1316, 1317, 1317, 1318, 1319, 1320, 1321, 1322,
    1323, 1324, 1325, 1326, 1327, 1328, 1329, 1329, 1330, 1331, 1332, 1333, 1334, 1335, 1336, 1337,
    1338, 1339, 1340, 1341, 1342, 1342, 1343, 1344, 1345, 1346, 1347, 1348, 1349, 1350, 1351, 1352,
    1353, 1354, 1355, 1356, 1356, 1357, 1358, 1359, 1360, 1361, 1362, 1363, 1364, 1365, 1366, 1367,
    1368, 1369, 1370, 1370, 1371, 1372, 1373, 1374, 1375, 1376, 1377, 1378, 1379, 1380, 1381, 1382,
    1383, 1384, 1385, 1385, 1386, 1387, 1388, 1389, 1390, 1391, 1392, 1393, 1394, 1395, 1396, 1397,
    1398, 1399, 1400, 1401, 1401, 1402, 1403, 1404, 1405, 1406, 1407, 1408, 1409, 1410, 1411, 1412,
    1413, 1414, 1415, 1416, 1417, 1417, 1418, 1419, 1420, 1421, 1422, 1423, 1424, 1425, 1426, 1427,
    1428, 1429, 1430, 1431, 1432, 1433, 1434, 1435, 1435, 1436, 1437, 1438, 1439, 1440, 1441, 1442,
    1443, 1444, 1445, 1446, 1447, 1448, 1449, 1450, 1451, 1452, 1453, 1454, 1455, 1455, 1456, 1457,
    1458, 1459, 1460, 1461, 1462, 1463, 1464, 1465, 1466, 1467, 1468, 1469, 1470, 1471, 1472, 1473,
    1474, 1475, 1476, 1476, 1477, 1478, 1479, 1480, 1481, 1482, 1483, 1484, 1485, 1486, 1487, 1488,
    1489, 1490, 1491, 1492, 1493, 1494, 1495, 1496, 1497, 1498, 1499, 1500, 1500, 1501, 1502, 1503,
    1504, 1505, 1506, 1507, 1508, 1509, 1510, 1511, 1512, 1513, 1514, 1515, 1516, 1517, 1518, 1519,
    1520, 1521, 1522, 1523, 1524, 1525, 1526, 1526, 1527, 1528, 1529, 1530, 1531, 1532, 1533, 1534,
    1535, 1536, 1537, 1538, 1539, 1540, 1541, 1542, 1543, 1544, 1545, 1546, 1547, 1548, 1549, 1550,
    1551, 1552, 1553, 1554, 1555, 1556, 1556, 1557, 1558, 1559, 1560, 1561, 1562, 1563, 1564, 1565,
    1566, 1567, 1568, 1569, 1570, 1571, 1572, 1573, 1574, 1575, 1576, 1577, 1578, 1579, 1580, 1581,
    1582, 1583, 1584, 1585, 1586, 1587, 1588, 1589, 1590, 1591, 1592, 1592, 1593, 1594, 1595, 1596,
    1597, 1598, 1599, 1600, 1601, 1602, 1603, 1604, 1605, 1606, 1607, 1608, 1609, 1610, 1611, 1612,
    1613, 1614, 1615, 1616, 1617, 1618, 1619, 1620, 1621, 1622, 1623, 1624, 1625, 1626, 1627, 1628,
    1629, 1630, 1631, 1632, 1633, 1634, 1635, 1636, 1637, 1637, 1638, 1639, 1640, 1641, 1642, 1643,
    1644, 1645, 1646, 1647, 1648, 1649, 1650, 1651, 1652, 1653, 1654, 1655, 1656, 1657, 1658, 1659,
    1660, 1661, 1662, 1663, 1664, 1665, 1666, 1667, 1668, 1669, 1670, 1671, 1672, 1673, 1674, 1675,
    1676, 1677, 1678, 1679, 1680, 1681, 1682, 1683, 1684, 1685, 1686, 1687, 1688, 1689, 1690, 1691,
    1692, 1693, 1694, 1695, 1696, 1697, 1698, 1699, 1700, 1701, 1702, 1702, 1703, 1704, 1705, 1706,
    1707, 1708, 1709, 1710, 1711, 1712, 1713, 1714, 1715, 1716, 1717, 1718, 1719, 1720, 1721, 1722,
    1723, 1724, 1725, 1726, 1727, 1728, 1729, 1730, 1731, 1732, 1733, 1734, 1735, 1736, 1737, 1738,
    1739, 1740, 1741, 1742, 1743, 1744, 1745, 1746, 1747, 1748, 1749, 1750, 1751, 1752, 1753, 1754,
    1755, 1756, 1757, 1758, 1759, 1760, 1761, 1762, 1763, 1764, 1765, 1766, 1767, 1768, 1769, 1770,
    1771, 1772, 1773, 1774, 1775, 1776, 1777, 1778, 1779, 1780, 1781, 1782, 1783, 1784, 1785, 1786,
    1787, 1788, 1789, 1790, 1791, 1792, 1793, 1794, 1795, 1796, 1797, 1798, 1799, 1800, 1801, 1802,
    1803, 1804, 1805, 1806, 1807, 1808, 1809, 1810, 1811, 1812, 1813, 1814, 1815, 1816, 1817, 1818,
    1819, 1820, 1821, 1822, 1823, 1824, 1825, 1826, 1827, 1828, 1829, 1830, 1831, 1832, 1833, 1834,
    1835, 1836, 1837, 1838, 1839, 1840, 1841, 1842, 1843, 1844, 1845, 1846, 1847, 1848, 1849, 1850,
    1851, 1852, 1853, 1854, 1855, 1856, 1857, 1858, 1859, 1860, 1861, 1862, 1863, 1864, 1865, 1866,
    1867, 1868, 1869, 1870, 1871, 1872, 1873, 1874, 1875, 1876, 1877, 1878, 1879, 1880, 1881, 1882,
    1883, 1884, 1885, 1886, 1887, 1888, 1889, 1890, 1891, 1892, 1893, 1894, 1895, 1896, 1897, 1898,
    1899, 1900, 1901, 1902, 1903, 1904, 1905, 1906, 1907, 1908, 1909, 1910, 1911, 1912, 1913, 1914,
    1915, 1916, 1917, 1918, 1919, 1920, 1921, 1922, 1923, 1924, 1925, 1926, 1927, 1928, 1929, 1930,
    1931, 1932, 1933, 1934, 1935, 1936, 1937, 1938, 1939, 1940, 1941, 1942, 1943, 1944, 1945, 1946,
    1947, 1948, 1949, 1950, 1951, 1952, 1953, 1954, 1954, 1955, 1956, 1957, 1958, 1959, 1960, 1961,
    1962, 1963, 1964, 1965, 1966, 1967, 1968, 1969, 1970, 1971, 1972, 1973, 1974, 1975, 1976, 1977,
    1978, 1979, 1980, 1981, 1982, 1983, 1984, 1985, 1986, 1987, 1988, 1989, 1990, 1991, 1992, 1993,
    1994, 1995, 1996, 1997, 1998, 1999, 2000, 2001, 2002, 2003, 2004, 2005, 2006, 2007, 2008, 2009,
    2010, 2011, 2012, 2013, 2014, 2015, 2016, 2017, 2018, 2019, 2020, 2021, 2022, 2023, 2024, 2025,
    2026, 2027, 2028, 2029, 2030, 2031, 2032, 2033, 2034, 2035, 2036, 2037, 2038, 2039, 2040, 2041,
    2042, 2043, 2044, 2045, 2046, 2047, 2048, 2049, 2050, 2051, 2052, 2053, 2054, 2055, 2056, 2057,
    2058, 2059, 2060, 2061, 2062, 2063, 2064, 2065, 2066, 2067, 2068, 2069, 2070, 2071, 2072, 2073,
    2074, 2075, 2076, 2077, 2078, 2079, 2080, 2081, 2082, 2083, 2084, 2085, 2086, 2087, 2088, 2089,
    2090, 2091, 2092, 2093, 2094, 2095, 2096, 2097, 2098, 2099, 2100, 2101, 2102, 2103, 2104, 2105,
    2106, 2107, 2108, 2109, 2110, 2111, 2112, 2113, 2114, 2115, 2116, 2117, 2118, 2119, 2120, 2121,
    2122, 2123, 2124, 2125, 2126, 2127, 2128, 2129, 2130, 2131, 2132, 2133, 2134, 2135, 2136, 2137,
    2138, 2139, 2140, 2141, 2142, 2143, 2144, 2145, 2146, 2147, 2148, 2149, 2150, 2151, 2152, 2153,
    2154, 2155, 2156, 2157, 2158, 2159, 2160, 2161, 2162, 2163, 2164, 2165, 2166, 2167, 2168, 2169,
    2170, 2171, 2172, 2173, 2174, 2175, 2176, 2177, 2178, 2179, 2180, 2181, 2182, 2183, 2184, 2185,
    2186, 2187, 2188, 2189, 2190, 2191, 2192, 2193, 2194, 2195, 2196, 2197, 2198, 2199, 2200, 2201,
    2202, 2203, 2204, 2205, 2205, 2206, 2207, 2208, 2209, 2210, 2211, 2212, 2213, 2214, 2215, 2216,
    2217, 2218, 2219, 2220, 2221, 2222, 2223, 2224, 2225, 2226, 2227, 2228, 2229, 2230, 2231, 2232,
    2233, 2234, 2235, 2236, 2237, 2238, 2239, 2240, 2241, 2242, 2243, 2244, 2245, 2246, 2247, 2248,
    2249, 2250, 2251, 2252, 2253, 2254, 2255, 2256, 2257, 2258, 2259, 2260, 2261, 2262, 2263, 2264,
    2265, 2266, 2267, 2268, 2269, 2270, 2270, 2271, 2272, 2273, 2274, 2275, 2276, 2277, 2278, 2279,
    2280, 2281, 2282, 2283, 2284, 2285, 2286, 2287, 2288, 2289, 2290, 2291, 2292, 2293, 2294, 2295,
    2296, 2297, 2298, 2299, 2300, 2301, 2302, 2303, 2304, 2305, 2306, 2307, 2308, 2309, 2310, 2311,
    2312, 2313, 2314, 2315, 2315, 2316, 2317, 2318, 2319, 2320, 2321, 2322, 2323, 2324, 2325, 2326,
    2327, 2328, 2329, 2330, 2331, 2332, 2333, 2334, 2335, 2336, 2337, 2338, 2339, 2340, 2341, 2342,
    2343, 2344, 2345, 2346, 2347, 2348, 2349, 2350, 2351, 2351, 2352, 2353, 2354, 2355, 2356, 2357,
    2358, 2359, 2360, 2361, 2362, 2363, 2364, 2365, 2366, 2367, 2368, 2369, 2370, 2371, 2372, 2373,
    2374, 2375, 2376, 2377, 2378, 2379, 2380, 2381, 2381, 2382, 2383, 2384, 2385, 2386, 2387, 2388,
    2389, 2390, 2391, 2392, 2393, 2394, 2395, 2396, 2397, 2398, 2399, 2400, 2401, 2402, 2403, 2404,
    2405, 2406, 2407, 2407, 2408, 2409, 2410, 2411, 2412, 2413, 2414, 2415, 2416, 2417, 2418, 2419,
    2420, 2421, 2422, 2423, 2424, 2425, 2426, 2427, 2428, 2429, 2430, 2431, 2431, 2432, 2433, 2434,
    2435, 2436, 2437, 2438, 2439, 2440, 2441, 2442, 2443, 2444, 2445, 2446, 2447, 2448, 2449, 2450,
    2451, 2452, 2452, 2453, 2454, 2455, 2456, 2457, 2458, 2459, 2460, 2461, 2462, 2463, 2464, 2465,
    2466, 2467, 2468, 2469, 2470, 2471, 2472, 2472, 2473, 2474, 2475, 2476, 2477, 2478, 2479, 2480,
    2481, 2482, 2483, 2484, 2485, 2486, 2487, 2488, 2489, 2490, 2490, 2491, 2492, 2493, 2494, 2495,
    2496, 2497, 2498, 2499, 2500, 2501, 2502, 2503, 2504, 2505, 2506, 2506, 2507, 2508, 2509, 2510,
    2511, 2512, 2513, 2514, 2515, 2516, 2517, 2518, 2519, 2520, 2521, 2522, 2522, 2523, 2524, 2525,
    2526, 2527, 2528, 2529, 2530, 2531, 2532, 2533, 2534, 2535, 2536, 2537, 2537, 2538, 2539, 2540,
    2541, 2542, 2543, 2544, 2545, 2546, 2547, 2548, 2549, 2550, 2551, 2551, 2552, 2553, 2554, 2555,
    2556, 2557, 2558, 2559, 2560, 2561, 2562, 2563, 2564, 2565, 2565, 2566, 2567, 2568, 2569, 2570,
    2571, 2572, 2573, 2574, 2575, 2576, 2577, 2578, 2578, 2579, 2580, 2581, 2582, 2583, 2584, 2585,
    2586, 2587, 2588, 2589, 2590, 2590, 2591, 2592, 2593, 2594, 2595, 2596, 2597, 2598, 2599, 2600,
    2601, 2602, 2602, 2603, 2604, 2605, 2606, 2607, 2608, 2609, 2610, 2611, 2612, 2613, 2613, 2614,
    2615, 2616, 2617, 2618, 2619, 2620, 2621, 2622, 2623, 2624, 2624, 2625, 2626, 2627, 2628, 2629,
    2630, 2631, 2632, 2633, 2634, 2634, 2635, 2636, 2637, 2638, 2639, 2640, 2641, 2642, 2643, 2644,
    2644, 2645, 2646, 2647, 2648, 2649, 2650, 2651, 2652, 2653, 2654, 2654, 2655, 2656, 2657, 2658,
    2659, 2660, 2661, 2662, 2663, 2664, 2664, 2665, 2666, 2667, 2668, 2669, 2670, 2671, 2672, 2673,
    2673, 2674, 2675, 2676, 2677, 2678, 2679, 2680, 2681, 2682, 2682, 2683, 2684, 2685, 2686, 2687,
    2688, 2689, 2690, 2691, 2691, 2692, 2693, 2694, 2695, 2696, 2697, 2698, 2699, 2699, 2700, 2701,
    2702, 2703, 2704, 2705, 2706, 2707, 2708, 2708, 2709, 2710, 2711, 2712, 2713, 2714, 2715, 2716,
    2716, 2717, 2718, 2719, 2720, 2721, 2722, 2723, 2724, 2724, 2725, 2726, 2727, 2728, 2729, 2730,
    2731, 2731, 2732, 2733, 2734, 2735, 2736, 2737, 2738, 2739, 2739, 2740, 2741, 2742, 2743, 2744,
    2745, 2746, 2746, 2747, 2748, 2749, 2750, 2751, 2752, 2753, 2754, 2754, 2755, 2756, 2757, 2758,
    2759, 2760, 2761, 2761, 2762, 2763, 2764, 2765, 2766, 2767, 2768, 2768, 2769, 2770, 2771, 2772,
    2773, 2774, 2774, 2775, 2776, 2777, 2778, 2779, 2780, 2781, 2781, 2782, 2783, 2784, 2785, 2786,
    2787, 2788, 2788, 2789, 2790, 2791, 2792, 2793, 2794, 2794, 2795, 2796, 2797, 2798, 2799, 2800,
    2800, 2801, 2802, 2803, 2804, 2805, 2806, 2807, 2807, 2808, 2809, 2810, 2811, 2812, 2813, 2813,
    2814, 2815, 2816, 2817, 2818, 2819, 2819, 2820, 2821, 2822, 2823, 2824, 2825, 2825, 2826, 2827,
    2828, 2829, 2830, 2830, 2831, 2832, 2833, 2834, 2835, 2836, 2836, 2837, 2838, 2839, 2840, 2841,
    2842, 2842, 2843, 2844, 2845, 2846, 2847, 2847, 2848, 2849, 2850, 2851, 2852, 2853, 2853, 2854,
    2855, 2856, 2857, 2858, 2858, 2859, 2860, 2861, 2862, 2863, 2863, 2864, 2865, 2866, 2867, 2868,
    2869, 2869, 2870, 2871, 2872, 2873, 2874, 2874, 2875, 2876, 2877, 2878, 2879, 2879, 2880, 2881,
    2882, 2883, 2884, 2884, 2885, 2886, 2887, 2888, 2889, 2889, 2890, 2891, 2892, 2893, 2894, 2894,
    2895, 2896, 2897, 2898, 2899, 2899, 2900, 2901, 2902, 2903, 2903, 2904, 2905, 2906, 2907, 2908,
    2908, 2909, 2910, 2911, 2912, 2913, 2913, 2914, 2915, 2916, 2917, 2917, 2918, 2919, 2920, 2921,
    2922, 2922, 2923, 2924, 2925, 2926, 2926, 2927, 2928, 2929, 2930, 2931, 2931, 2932, 2933, 2934,
    2935, 2935, 2936, 2937, 2938, 2939, 2939, 2940, 2941, 2942, 2943, 2944, 2944, 2945, 2946, 2947,
    2948, 2948, 2949, 2950, 2951, 2952, 2952, 2953, 2954, 2955, 2956, 2956, 2957, 2958, 2959, 2960,
    2960, 2961, 2962, 2963, 2964, 2964, 2965, 2966, 2967, 2968, 2968, 2969, 2970, 2971, 2972, 2972,
    2973, 2974, 2975, 2976, 2976, 2977, 2978, 2979, 2980, 2980, 2981, 2982, 2983, 2984, 2984, 2985,
    2986, 2987, 2988, 2988, 2989, 2990, 2991, 2992, 2992, 2993, 2994, 2995, 2996, 2996, 2997, 2998,
    2999, 2999, 3000, 3001, 3002, 3003, 3003, 3004, 3005, 3006, 3007, 3007, 3008, 3009, 3010, 3010,
    3011, 3012, 3013, 3014, 3014, 3015, 3016, 3017, 3017, 3018, 3019, 3020, 3021, 3021, 3022, 3023,
    3024, 3024, 3025, 3026, 3027, 3028, 3028, 3029, 3030, 3031, 3031, 3032, 3033, 3034, 3035, 3035,
    3036, 3037, 3038, 3038, 3039, 3040, 3041, 3041, 3042, 3043, 3044, 3045, 3045, 3046, 3047, 3048,
    3048, 3049, 3050, 3051, 3051, 3052, 3053, 3054, 3054, 3055, 3056, 3057, 3058, 3058, 3059, 3060,
    3061, 3061, 3062, 3063, 3064, 3064, 3065, 3066, 3067, 3067, 3068, 3069, 3070, 3070, 3071, 3072,
    3073, 3073, 3074, 3075, 3076, 3076, 3077, 3078, 3079, 3079, 3080, 3081, 3082, 3082, 3083, 3084,
    3085, 3085, 3086, 3087, 3088, 3088, 3089, 3090, 3091, 3091, 3092, 3093, 3094, 3094, 3095, 3096,
    3097, 3097, 3098, 3099, 3100, 3100, 3101, 3102, 3103, 3103, 3104, 3105, 3106, 3106, 3107, 3108,
    3109, 3109, 3110, 3111, 3111, 3112, 3113, 3114, 3114, 3115, 3116, 3117, 3117, 3118, 3119, 3120,
    3120, 3121, 3122, 3122, 3123, 3124, 3125, 3125, 3126, 3127, 3128, 3128, 3129, 3130, 3130, 3131,
    3132, 3133, 3133, 3134, 3135, 3136, 3136, 3137, 3138, 3138, 3139, 3140, 3141, 3141, 3142, 3143,
    3144, 3144, 3145, 3146, 3146, 3147, 3148, 3149, 3149, 3150, 3151, 3151, 3152, 3153, 3154, 3154,
    3155, 3156, 3156, 3157, 3158, 3159, 3159, 3160, 3161, 3161, 3162, 3163, 3164, 3164, 3165, 3166,
    3166, 3167, 3168, 3169, 3169, 3170, 3171, 3171, 3172, 3173, 3173, 3174, 3175, 3176, 3176, 3177,
    3178, 3178, 3179, 3180, 3181, 3181, 3182, 3183, 3183, 3184, 3185, 3185, 3186, 3187, 3188, 3188,
    3189, 3190, 3190, 3191, 3192, 3192, 3193, 3194, 3194, 3195, 3196, 3197, 3197, 3198, 3199, 3199,
    3200, 3201, 3201, 3202, 3203, 3203, 3204, 3205, 3206, 3206, 3207, 3208, 3208, 3209, 3210, 3210,
    3211, 3212, 3212, 3213, 3214, 3214, 3215, 3216, 3217, 3217, 3218, 3219, 3219, 3220, 3221, 3221,
    3222, 3223, 3223, 3224, 3225, 3225, 3226, 3227, 3227, 3228, 3229, 3229, 3230, 3231, 3231, 3232,
    3233, 3233, 3234, 3235, 3236, 3236, 3237, 3238, 3238, 3239, 3240, 3240, 3241, 3242, 3242, 3243,
    3244, 3244, 3245, 3246, 3246, 3247, 3248, 3248, 3249, 3250, 3250, 3251, 3252, 3252, 3253, 3254,
    3254, 3255, 3256, 3256, 3257, 3258, 3258, 3259, 3260, 3260, 3261, 3261, 3262, 3263, 3263, 3264,
    3265, 3265, 3266, 3267, 3267, 3268, 3269, 3269, 3270, 3271, 3271, 3272, 3273, 3273, 3274, 3275,
    3275, 3276, 3277, 3277, 3278, 3278, 3279, 3280, 3280, 3281, 3282, 3282, 3283, 3284, 3284, 3285,
    3286, 3286, 3287, 3288, 3288, 3289, 3289, 3290, 3291, 3291, 3292, 3293, 3293, 3294, 3295, 3295,
    3296, 3297, 3297, 3298, 3298, 3299, 3300, 3300, 3301, 3302, 3302, 3303, 3304, 3304, 3305, 3305,
    3306, 3307, 3307, 3308, 3309, 3309, 3310, 3310, 3311, 3312, 3312, 3313, 3314, 3314, 3315, 3316,
    3316, 3317, 3317, 3318, 3319, 3319, 3320, 3321, 3321, 3322, 3322, 3323, 3324, 3324, 3325, 3325,
    3326, 3327, 3327, 3328, 3329, 3329, 3330, 3330, 3331, 3332, 3332, 3333, 3334, 3334, 3335, 3335,
    3336, 3337, 3337, 3338, 3338, 3339, 3340, 3340, 3341, 3342, 3342, 3343, 3343, 3344, 3345, 3345,
    3346, 3346, 3347, 3348, 3348, 3349, 3349, 3350, 3351, 3351, 3352, 3352, 3353, 3354, 3354, 3355,
    3356, 3356, 3357, 3357, 3358, 3359, 3359, 3360, 3360, 3361, 3362, 3362, 3363, 3363, 3364, 3365,
    3365, 3366, 3366, 3367, 3368, 3368, 3369, 3369, 3370, 3370, 3371, 3372, 3372, 3373, 3373, 3374,
    3375, 3375, 3376, 3376, 3377, 3378, 3378, 3379, 3379, 3380, 3381, 3381, 3382, 3382, 3383, 3383,
    3384, 3385, 3385, 3386, 3386, 3387, 3388, 3388, 3389, 3389, 3390, 3390, 3391, 3392, 3392, 3393,
    3393, 3394, 3395, 3395, 3396, 3396, 3397, 3397, 3398, 3399, 3399, 3400, 3400, 3401, 3401, 3402,
    3403, 3403, 3404, 3404, 3405, 3405, 3406, 3407, 3407, 3408, 3408, 3409, 3409, 3410, 3411, 3411,
    3412, 3412, 3413, 3413, 3414, 3415, 3415, 3416, 3416, 3417, 3417, 3418, 3419, 3419, 3420, 3420,
    3421, 3421, 3422, 3422, 3423, 3424, 3424, 3425, 3425, 3426, 3426, 3427, 3427, 3428, 3429, 3429,
    3430, 3430, 3431, 3431, 3432, 3432, 3433, 3434, 3434, 3435, 3435, 3436, 3436, 3437, 3437, 3438,
    3439, 3439, 3440, 3440, 3441, 3441, 3442, 3442, 3443, 3443, 3444, 3445, 3445, 3446, 3446, 3447,
    3447, 3448, 3448, 3449, 3449, 3450, 3451, 3451, 3452, 3452, 3453, 3453, 3454, 3454, 3455, 3455,
    3456, 3457, 3457, 3458, 3458, 3459, 3459, 3460, 3460, 3461, 3461, 3462, 3462, 3463, 3463, 3464,
    3465, 3465, 3466, 3466, 3467, 3467, 3468, 3468, 3469, 3469, 3470, 3470, 3471, 3471, 3472, 3472,
    3473, 3474, 3474, 3475, 3475, 3476, 3476, 3477, 3477, 3478, 3478, 3479, 3479, 3480, 3480, 3481,
    3481, 3482, 3482, 3483, 3483, 3484, 3484, 3485, 3486, 3486, 3487, 3487, 3488, 3488, 3489, 3489,
    3490, 3490, 3491, 3491, 3492, 3492, 3493, 3493, 3494, 3494, 3495, 3495, 3496, 3496, 3497, 3497,
    3498, 3498, 3499, 3499, 3500, 3500, 3501, 3501, 3502, 3502, 3503, 3503, 3504, 3504, 3505, 3505,
    3506, 3506, 3507, 3507, 3508, 3508, 3509, 3509, 3510, 3510, 3511, 3511, 3512, 3512, 3513, 3513,
    3514, 3514, 3515, 3515, 3516, 3516, 3517, 3517, 3518, 3518, 3519, 3519, 3520, 3520, 3521, 3521,
    3522, 3522, 3523, 3523, 3524, 3524, 3525, 3525, 3526, 3526, 3527, 3527, 3528, 3528, 3529, 3529,
    3530, 3530, 3531, 3531, 3532, 3532, 3533, 3533, 3534, 3534, 3535, 3535, 3536, 3536, 3536, 3537,
    3537, 3538, 3538, 3539, 3539, 3540, 3540, 3541, 3541, 3542, 3542, 3543, 3543, 3544, 3544, 3545,
    3545, 3546, 3546, 3546, 3547, 3547, 3548, 3548, 3549, 3549, 3550, 3550, 3551, 3551, 3552, 3552,
    3553, 3553, 3554, 3554, 3554, 3555, 3555, 3556, 3556, 3557, 3557, 3558, 3558, 3559, 3559, 3560,
    3560, 3561, 3561, 3561, 3562, 3562, 3563, 3563, 3564, 3564, 3565, 3565, 3566, 3566, 3567, 3567,
    3567, 3568, 3568, 3569, 3569, 3570, 3570, 3571, 3571, 3572, 3572, 3572, 3573, 3573, 3574, 3574,
    3575, 3575, 3576, 3576, 3577, 3577, 3577, 3578, 3578, 3579, 3579, 3580, 3580, 3581, 3581, 3581,
    3582, 3582, 3583, 3583, 3584, 3584, 3585, 3585, 3585, 3586, 3586, 3587, 3587, 3588, 3588, 3589,
    3589, 3589, 3590, 3590, 3591, 3591, 3592, 3592, 3593, 3593, 3593, 3594, 3594, 3595, 3595, 3596,
    3596, 3596, 3597, 3597, 3598, 3598, 3599, 3599, 3600, 3600, 3600, 3601, 3601, 3602, 3602, 3603,
    3603, 3603, 3604, 3604, 3605, 3605, 3606, 3606, 3606, 3607, 3607, 3608, 3608, 3609, 3609, 3609,
    3610, 3610, 3611, 3611, 3611, 3612, 3612, 3613, 3613, 3614, 3614, 3614, 3615, 3615, 3616, 3616,
    3617, 3617, 3617, 3618, 3618, 3619, 3619, 3619, 3620, 3620, 3621, 3621, 3622, 3622, 3622, 3623,
    3623, 3624, 3624, 3624, 3625, 3625, 3626, 3626, 3627, 3627, 3627, 3628, 3628, 3629, 3629, 3629,
    3630, 3630, 3631, 3631, 3631, 3632, 3632, 3633, 3633, 3633, 3634, 3634, 3635, 3635, 3635, 3636,
    3636, 3637, 3637, 3637, 3638, 3638, 3639, 3639, 3639, 3640, 3640, 3641, 3641, 3641, 3642, 3642,
    3643, 3643, 3643, 3644, 3644, 3645, 3645, 3645, 3646, 3646, 3647, 3647, 3647, 3648, 3648, 3649,
    3649, 3649, 3650, 3650, 3651, 3651, 3651, 3652, 3652, 3653, 3653, 3653, 3654, 3654, 3654, 3655,
    3655, 3656, 3656, 3656, 3657, 3657, 3658, 3658, 3658, 3659, 3659, 3659, 3660, 3660, 3661, 3661,
    3661, 3662, 3662, 3663, 3663, 3663, 3664, 3664, 3664, 3665, 3665, 3666, 3666, 3666, 3667, 3667,
    3667, 3668, 3668, 3669, 3669, 3669, 3670, 3670, 3670, 3671, 3671, 3672, 3672, 3672, 3673, 3673,
    3673, 3674, 3674, 3675, 3675, 3675, 3676, 3676, 3676, 3677, 3677, 3678, 3678, 3678, 3679, 3679,
    3679, 3680, 3680, 3680, 3681, 3681, 3682, 3682, 3682, 3683, 3683, 3683, 3684, 3684, 3684, 3685,
    3685, 3686, 3686, 3686, 3687, 3687, 3687, 3688, 3688, 3688, 3689, 3689, 3690, 3690, 3690, 3691,
    3691, 3691, 3692, 3692, 3692, 3693, 3693, 3693, 3694, 3694, 3694, 3695, 3695, 3696, 3696, 3696,
    3697, 3697, 3697, 3698, 3698, 3698, 3699, 3699, 3699, 3700, 3700, 3700, 3701, 3701, 3701, 3702,
    3702, 3703, 3703, 3703, 3704, 3704, 3704, 3705, 3705, 3705, 3706, 3706, 3706, 3707, 3707, 3707,
    3708, 3708, 3708, 3709, 3709, 3709, 3710, 3710, 3710, 3711, 3711, 3711, 3712, 3712, 3712, 3713,
    3713, 3713, 3714, 3714, 3714, 3715, 3715, 3715, 3716, 3716, 3716, 3717, 3717, 3717, 3718, 3718,
    3718, 3719, 3719, 3719, 3720, 3720, 3720, 3721, 3721, 3721, 3722, 3722, 3722, 3723, 3723, 3723,
    3724, 3724, 3724, 3725, 3725, 3725, 3726, 3726, 3726, 3727, 3727, 3727, 3728, 3728, 3728, 3729,
    3729, 3729, 3730, 3730, 3730, 3731, 3731, 3731, 3731, 3732, 3732, 3732, 3733, 3733, 3733, 3734,
    3734, 3734, 3735, 3735, 3735, 3736, 3736, 3736, 3737, 3737, 3737, 3738, 3738, 3738, 3738, 3739,
    3739, 3739, 3740, 3740, 3740, 3741, 3741, 3741, 3742, 3742, 3742, 3743, 3743, 3743, 3743, 3744,
    3744, 3744, 3745, 3745, 3745, 3746, 3746, 3746, 3747, 3747, 3747, 3747, 3748, 3748, 3748, 3749,
    3749, 3749, 3750, 3750, 3750, 3750, 3751, 3751, 3751, 3752, 3752, 3752, 3753, 3753, 3753, 3753,
    3754, 3754, 3754, 3755, 3755, 3755, 3756, 3756, 3756, 3756, 3757, 3757, 3757, 3758, 3758, 3758,
    3759, 3759, 3759, 3759, 3760, 3760, 3760, 3761, 3761, 3761, 3761, 3762, 3762, 3762, 3763, 3763,
    3763, 3763, 3764, 3764, 3764, 3765, 3765, 3765, 3766, 3766, 3766, 3766, 3767, 3767, 3767, 3768,
    3768, 3768, 3768, 3769, 3769, 3769, 3770, 3770, 3770, 3770, 3771, 3771, 3771, 3771, 3772, 3772,
    3772, 3773, 3773, 3773, 3773, 3774, 3774, 3774, 3775, 3775, 3775, 3775, 3776, 3776, 3776, 3777,
    3777, 3777, 3777, 3778, 3778, 3778, 3778, 3779, 3779, 3779, 3780, 3780, 3780, 3780, 3781, 3781,
    3781, 3781, 3782, 3782, 3782, 3783, 3783, 3783, 3783, 3784, 3784, 3784, 3784, 3785, 3785, 3785,
    3786, 3786, 3786, 3786, 3787, 3787, 3787, 3787, 3788, 3788, 3788, 3788, 3789, 3789, 3789, 3790,
    3790, 3790, 3790, 3791, 3791, 3791, 3791, 3792, 3792, 3792, 3792, 3793, 3793, 3793, 3793, 3794,
    3794, 3794, 3794, 3795, 3795, 3795, 3796, 3796, 3796, 3796, 3797, 3797, 3797, 3797, 3798, 3798,
    3798, 3798, 3799, 3799, 3799, 3799, 3800, 3800, 3800, 3800, 3801, 3801, 3801, 3801, 3802, 3802,
    3802, 3802, 3803, 3803, 3803, 3803, 3804, 3804, 3804, 3804, 3805, 3805, 3805, 3805, 3806, 3806,
    3806, 3806, 3807, 3807, 3807, 3807, 3808, 3808, 3808, 3808, 3809, 3809, 3809, 3809, 3810, 3810,
    3810, 3810, 3811, 3811, 3811, 3811, 3812, 3812, 3812, 3812, 3812, 3813, 3813, 3813, 3813, 3814,
    3814, 3814, 3814, 3815, 3815, 3815, 3815, 3816, 3816, 3816, 3816, 3817, 3817, 3817, 3817, 3818,
    3818, 3818, 3818, 3818, 3819, 3819, 3819, 3819, 3820, 3820, 3820, 3820, 3821, 3821, 3821, 3821,
    3821, 3822, 3822, 3822, 3822, 3823, 3823, 3823, 3823, 3824, 3824, 3824, 3824, 3824, 3825, 3825,
    3825, 3825, 3826, 3826, 3826, 3826, 3827, 3827, 3827, 3827, 3827, 3828, 3828, 3828, 3828, 3829,
    3829, 3829, 3829, 3829, 3830, 3830, 3830, 3830, 3831, 3831, 3831, 3831, 3831, 3832, 3832, 3832,
    3832, 3833, 3833, 3833, 3833, 3833, 3834, 3834, 3834, 3834, 3835, 3835, 3835, 3835, 3835, 3836,
    3836, 3836, 3836, 3836, 3837, 3837, 3837, 3837, 3838, 3838, 3838, 3838, 3838, 3839, 3839, 3839,
    3839, 3839, 3840, 3840, 3840, 3840, 3841, 3841, 3841, 3841, 3841, 3842, 3842, 3842, 3842, 3842,
    3843, 3843, 3843, 3843, 3843, 3844, 3844, 3844, 3844, 3844, 3845, 3845, 3845, 3845, 3846, 3846,
    3846, 3846, 3846, 3847, 3847, 3847, 3847, 3847, 3848, 3848, 3848, 3848, 3848, 3849, 3849, 3849,
    3849, 3849, 3850, 3850, 3850, 3850, 3850, 3851, 3851, 3851, 3851, 3851, 3852, 3852, 3852, 3852,
    3852, 3853, 3853, 3853, 3853, 3853, 3854, 3854, 3854, 3854, 3854, 3855, 3855, 3855, 3855, 3855,
    3856, 3856, 3856, 3856, 3856, 3857, 3857, 3857, 3857, 3857, 3857, 3858, 3858, 3858, 3858, 3858,
    3859, 3859, 3859, 3859, 3859, 3860, 3860, 3860, 3860, 3860, 3861, 3861, 3861, 3861, 3861, 3861,
    3862, 3862, 3862, 3862, 3862, 3863, 3863, 3863, 3863, 3863, 3864, 3864, 3864, 3864, 3864, 3864,
    3865, 3865, 3865, 3865, 3865, 3866, 3866, 3866, 3866, 3866, 3867, 3867, 3867, 3867, 3867, 3867,
    3868, 3868, 3868, 3868, 3868, 3868, 3869, 3869, 3869, 3869, 3869, 3870, 3870, 3870, 3870, 3870,
    3870, 3871, 3871, 3871, 3871, 3871, 3872, 3872, 3872, 3872, 3872, 3872, 3873, 3873, 3873, 3873,
    3873, 3873, 3874, 3874, 3874, 3874, 3874, 3875, 3875, 3875, 3875, 3875, 3875, 3876, 3876, 3876,
    3876, 3876, 3876, 3877, 3877, 3877, 3877, 3877, 3877, 3878, 3878, 3878, 3878, 3878, 3878, 3879,
    3879, 3879, 3879, 3879, 3879, 3880, 3880, 3880, 3880, 3880, 3880, 3881, 3881, 3881, 3881, 3881,
    3881, 3882, 3882, 3882, 3882, 3882, 3882, 3883, 3883, 3883, 3883, 3883, 3883, 3884, 3884, 3884,
    3884, 3884, 3884, 3885, 3885, 3885, 3885, 3885, 3885, 3886, 3886, 3886, 3886, 3886, 3886, 3887,
    3887, 3887, 3887, 3887, 3887, 3887, 3888, 3888, 3888, 3888, 3888, 3888, 3889, 3889, 3889, 3889,
    3889, 3889, 3890, 3890, 3890, 3890, 3890, 3890, 3890, 3891, 3891, 3891, 3891, 3891, 3891, 3892,
    3892, 3892, 3892, 3892, 3892, 3892, 3893, 3893, 3893, 3893, 3893, 3893, 3894, 3894, 3894, 3894,
    3894, 3894, 3894, 3895, 3895, 3895, 3895, 3895, 3895, 3895, 3896, 3896, 3896, 3896, 3896, 3896,
    3897, 3897, 3897, 3897, 3897, 3897, 3897, 3898, 3898, 3898, 3898, 3898, 3898, 3898, 3899, 3899,
    3899, 3899, 3899, 3899, 3899, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3901, 3901, 3901, 3901,
    3901, 3901, 3901, 3902, 3902, 3902, 3902, 3902, 3902, 3902, 3903, 3903, 3903, 3903, 3903, 3903,
    3903, 3904, 3904, 3904, 3904, 3904, 3904, 3904, 3905, 3905, 3905, 3905, 3905, 3905, 3905, 3906,
    3906, 3906, 3906, 3906, 3906, 3906, 3906, 3907, 3907, 3907, 3907, 3907, 3907, 3907, 3908, 3908,
    3908, 3908, 3908, 3908, 3908, 3908, 3909, 3909, 3909, 3909, 3909, 3909, 3909, 3910, 3910, 3910,
    3910, 3910, 3910, 3910, 3910, 3911, 3911, 3911, 3911, 3911, 3911, 3911, 3912, 3912, 3912, 3912,
    3912, 3912, 3912, 3912, 3913, 3913, 3913, 3913, 3913, 3913, 3913, 3913, 3914, 3914, 3914, 3914,
    3914, 3914, 3914, 3914, 3915, 3915, 3915, 3915, 3915, 3915, 3915, 3915, 3916, 3916, 3916, 3916,
    3916, 3916, 3916, 3916, 3917, 3917, 3917, 3917, 3917, 3917, 3917, 3917, 3918, 3918, 3918, 3918,
    3918, 3918, 3918, 3918, 3919, 3919, 3919, 3919, 3919, 3919, 3919, 3919, 3919, 3920, 3920, 3920,
    3920, 3920, 3920, 3920, 3920, 3921, 3921, 3921, 3921, 3921, 3921, 3921, 3921, 3922, 3922, 3922,
    3922, 3922, 3922, 3922, 3922, 3922, 3923, 3923, 3923, 3923, 3923, 3923, 3923, 3923, 3923, 3924,
    3924, 3924, 3924, 3924, 3924, 3924, 3924, 3925, 3925, 3925, 3925, 3925, 3925, 3925, 3925, 3925,
    3926, 3926, 3926, 3926, 3926, 3926, 3926, 3926, 3926, 3927, 3927, 3927, 3927, 3927, 3927, 3927,
    3927, 3927, 3928, 3928, 3928, 3928, 3928, 3928, 3928, 3928, 3928, 3929, 3929, 3929, 3929, 3929,
    3929, 3929, 3929, 3929, 3929, 3930, 3930, 3930, 3930, 3930, 3930, 3930, 3930, 3930, 3931, 3931,
    3931, 3931, 3931, 3931, 3931, 3931, 3931, 3931, 3932, 3932, 3932, 3932, 3932, 3932, 3932, 3932,
    3932, 3933, 3933, 3933, 3933, 3933, 3933, 3933, 3933, 3933, 3933, 3934, 3934, 3934, 3934, 3934,
    3934, 3934, 3934, 3934, 3934, 3935, 3935, 3935, 3935, 3935, 3935, 3935, 3935, 3935, 3935, 3936,
    3936, 3936, 3936, 3936, 3936, 3936, 3936, 3936, 3936, 3937, 3937, 3937, 3937, 3937, 3937, 3937,
    3937, 3937, 3937, 3938, 3938, 3938, 3938, 3938, 3938, 3938, 3938, 3938, 3938, 3938, 3939, 3939,
    3939, 3939, 3939, 3939, 3939, 3939, 3939, 3939, 3940, 3940, 3940, 3940, 3940, 3940, 3940, 3940,
    3940, 3940, 3940, 3941, 3941, 3941, 3941, 3941, 3941, 3941, 3941, 3941, 3941, 3941, 3942, 3942,
    3942, 3942, 3942, 3942, 3942, 3942, 3942, 3942, 3942, 3943, 3943, 3943, 3943, 3943, 3943, 3943,
    3943, 3943, 3943, 3943, 3944, 3944, 3944, 3944, 3944, 3944, 3944, 3944, 3944, 3944, 3944, 3945,
    3945, 3945, 3945, 3945, 3945, 3945, 3945, 3945, 3945, 3945, 3945, 3946, 3946, 3946, 3946, 3946,
    3946, 3946, 3946, 3946, 3946, 3946, 3947, 3947, 3947, 3947, 3947, 3947, 3947, 3947, 3947, 3947,
    3947, 3947, 3948, 3948, 3948, 3948, 3948, 3948, 3948, 3948, 3948, 3948, 3948, 3948, 3949, 3949,
    3949, 3949, 3949, 3949, 3949, 3949, 3949, 3949, 3949, 3949, 3949, 3950, 3950, 3950, 3950, 3950,
    3950, 3950, 3950, 3950, 3950, 3950, 3950, 3951, 3951, 3951, 3951, 3951, 3951, 3951, 3951, 3951,
    3951, 3951, 3951, 3951, 3952, 3952, 3952, 3952, 3952, 3952, 3952, 3952, 3952, 3952, 3952, 3952,
    3952, 3953, 3953, 3953, 3953, 3953, 3953, 3953, 3953, 3953, 3953, 3953, 3953, 3953, 3954, 3954,
    3954, 3954, 3954, 3954, 3954, 3954, 3954, 3954, 3954, 3954, 3954, 3955, 3955, 3955, 3955, 3955,
    3955, 3955, 3955, 3955, 3955, 3955, 3955, 3955, 3955, 3956, 3956, 3956, 3956, 3956, 3956, 3956,
    3956, 3956, 3956, 3956, 3956, 3956, 3956, 3957, 3957, 3957, 3957, 3957, 3957, 3957, 3957, 3957,
    3957, 3957, 3957, 3957, 3957, 3958, 3958, 3958, 3958, 3958, 3958, 3958, 3958, 3958, 3958, 3958,
    3958, 3958, 3958, 3958, 3959, 3959, 3959, 3959, 3959, 3959, 3959, 3959, 3959, 3959, 3959, 3959,
    3959, 3959, 3959, 3960, 3960, 3960, 3960, 3960, 3960, 3960, 3960, 3960, 3960, 3960, 3960, 3960,
    3960, 3960, 3961, 3961, 3961, 3961, 3961, 3961, 3961, 3961, 3961, 3961, 3961, 3961, 3961, 3961,
    3961, 3962, 3962, 3962, 3962, 3962, 3962, 3962, 3962, 3962, 3962, 3962, 3962, 3962, 3962, 3962,
    3962, 3963, 3963, 3963, 3963, 3963, 3963, 3963, 3963, 3963, 3963, 3963, 3963, 3963, 3963, 3963,
    3963, 3964, 3964, 3964, 3964, 3964, 3964, 3964, 3964, 3964, 3964, 3964, 3964, 3964, 3964, 3964,
    3964, 3964, 3965, 3965, 3965, 3965, 3965, 3965, 3965, 3965, 3965, 3965, 3965, 3965, 3965, 3965,
    3965, 3965, 3965, 3966, 3966, 3966, 3966, 3966, 3966, 3966, 3966, 3966, 3966, 3966, 3966, 3966,
    3966, 3966, 3966, 3966, 3967, 3967, 3967, 3967, 3967, 3967, 3967, 3967, 3967, 3967, 3967, 3967,
    3967, 3967, 3967, 3967, 3967, 3967, 3968, 3968, 3968, 3968, 3968, 3968, 3968, 3968, 3968, 3968,
    3968, 3968, 3968, 3968, 3968, 3968, 3968, 3968, 3969, 3969, 3969, 3969, 3969, 3969, 3969, 3969,
    3969, 3969, 3969, 3969, 3969, 3969, 3969, 3969, 3969, 3969, 3969, 3970, 3970, 3970, 3970, 3970,
    3970, 3970, 3970, 3970, 3970, 3970, 3970, 3970, 3970, 3970, 3970, 3970, 3970, 3970, 3971, 3971,
    3971, 3971, 3971, 3971, 3971, 3971, 3971, 3971, 3971, 3971, 3971, 3971, 3971, 3971, 3971, 3971,
    3971, 3971, 3972, 3972, 3972, 3972, 3972, 3972, 3972, 3972, 3972, 3972, 3972, 3972, 3972, 3972,
    3972, 3972, 3972, 3972, 3972, 3972, 3972, 3973, 3973, 3973, 3973, 3973, 3973, 3973, 3973, 3973,
    3973, 3973, 3973, 3973, 3973, 3973, 3973, 3973, 3973, 3973, 3973, 3973, 3974, 3974, 3974, 3974,
    3974, 3974, 3974, 3974, 3974, 3974, 3974, 3974, 3974, 3974, 3974, 3974, 3974, 3974, 3974, 3974,
    3974, 3974, 3975, 3975, 3975, 3975, 3975, 3975, 3975, 3975, 3975, 3975, 3975, 3975, 3975, 3975,
    3975, 3975, 3975, 3975, 3975, 3975, 3975, 3975, 3976, 3976, 3976, 3976, 3976, 3976, 3976, 3976,
    3976, 3976, 3976, 3976, 3976, 3976, 3976, 3976, 3976, 3976, 3976, 3976, 3976, 3976, 3976, 3976,
    3977, 3977, 3977, 3977, 3977, 3977, 3977, 3977, 3977, 3977, 3977, 3977, 3977, 3977, 3977, 3977,
    3977, 3977, 3977, 3977, 3977, 3977, 3977, 3977, 3978, 3978, 3978, 3978, 3978, 3978, 3978, 3978,
    3978, 3978, 3978, 3978, 3978, 3978, 3978, 3978, 3978, 3978, 3978, 3978, 3978, 3978, 3978, 3978,
    3978, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979,
    3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3979, 3980, 3980, 3980, 3980, 3980,
    3980, 3980, 3980, 3980, 3980, 3980, 3980, 3980, 3980, 3980, 3980, 3980, 3980, 3980, 3980, 3980,
    3980, 3980, 3980, 3980, 3980, 3980, 3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981,
    3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981, 3981,
    3981, 3981, 3981, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982,
    3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982, 3982,
    3982, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983,
    3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983, 3983,
    3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984,
    3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984, 3984,
    3984, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985,
    3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985, 3985,
    3985, 3985, 3985, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986,
    3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986,
    3986, 3986, 3986, 3986, 3986, 3986, 3986, 3986, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987,
    3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987,
    3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3987, 3988,
    3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988,
    3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988,
    3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3988, 3989, 3989, 3989, 3989, 3989, 3989, 3989,
    3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989,
    3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989, 3989,
    3989, 3989, 3989, 3989, 3989, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990,
    3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990,
    3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990, 3990,
    3990, 3990, 3990, 3990, 3990, 3990, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991,
    3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991,
    3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991,
    3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3991, 3992, 3992, 3992, 3992, 3992, 3992,
    3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992,
    3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992,
    3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992, 3992,
    3992, 3992, 3992, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993,
    3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993,
    3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993,
    3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993, 3993,
    3993, 3993, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994,
    3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994,
    3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994,
    3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994,
    3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3994, 3995, 3995, 3995, 3995, 3995, 3995, 3995,
    3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995,
    3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995,
    3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995,
    3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995,
    3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3995, 3996, 3996, 3996, 3996, 3996, 3996,
    3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996,
    3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996,
    3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996,
    3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996,
    3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996, 3996,
    3996, 3996, 3996, 3996, 3996, 3996, 3996, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997,
    3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997,
    3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997,
    3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997,
    3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997,
    3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997,
    3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997, 3997,
    3997, 3997, 3997, 3997, 3997, 3997, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998,
    3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998,
    3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998,
    3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998,
    3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998,
    3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998,
    3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998,
    3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998,
    3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3998, 3999, 3999,
    3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999,
    3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999,
    3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999,
    3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999,
    3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999,
    3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999,
    3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999,
    3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999,
    3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999,
    3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999,
    3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999, 3999,
    3999, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000, 4000,
    4000,
];
