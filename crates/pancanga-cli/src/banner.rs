//! Static text shown around the prompts

pub const CREDITS: &str = "\
********* Pancanga vers.3.14 **********   M. YANO and M. FUSHIMI
----------------- perl version ------------- March 2014
This program is based on the Suuryasiddhaanta (ca AD 1000),
and also on the older constants of the Pancasiddhaantikaa (AD 505).

  Menus:
   Try  : To find the modern date from the given Indian date.   The
       result is not always correct.  (Sometimes error is one month
       because of adhimaasa.) You should confirm it by menu 'List'
  List  : To find the Indian date (in amaanta) from the given modern
       date.  The result is considerably reliable:  the month names
       are almost always correct;only the error of 1 tithi is to be
       admitted because of occurrence of Ksayadina or adhidina.
Verbose :   To get the further details of 'List'
Settings:   To set local 'Latitude' & 'Longitude' and
       'System' ('SuryaSiddhanta' or 'InPancasiddhantika').
  NOTICE:   Remember the difference of 'amaanta' and 'purNimaanta'
            Beginning of the year is set for 'Caitra' 'sukla' 1.
  ***** This program should not be copied without our permission.
  Please contact:
         M.YANO (for Indian astronomy): yanom@cc.kyoto-su.ac.jp
         M.FUSHIMI (for programming): makoto.fushimi at nifty.com
";

/// Reference latitudes, shown before asking for a new latitude
pub const LATITUDES: &str = r"   ------------------------------------------------------------ 
  |                  Latitude                                  |
  |                                                            |
  |_____                              ______36                 |
  |                  *                         Srinagar:34.1   |
  |_____                              ______32                 |
  |                    *                       Delhi:28.6      |
  |_____                         *    ______28 Kathmandu:27.7  |
  |                          *                 Varanasi:25.3   |
  |_____ ---\                         ______24 Ujjain:23.2     |
  |          \//      *           *___         Calcutta:22.6   |
  |_____       \_/|             _/~   ~_____20                 |
  |               |*          _/               Bombay:19.0     |
  |_____           \     *  _/        ______16 Hyderabad:17.4  |
  |                 \      |                                   |
  |_____             \    *|          ______12 Madras:13.1     |
  |                   \   /                                    |
  |_____               \*/ /\         ______08 Trivandrum:8.5  |
  |                       |* |                 Colombo:6.9     |
  |_____                   --         ______04                 |
  |                                                            |
   ------------------------------------------------------------ ";

/// Reference longitudes, shown before asking for a new longitude
pub const LONGITUDES: &str = r"   ------------------------------------------------------------ 
  |                  Longitude                                 |
  |            |     |     |     |     |                       |
  |            |     |     |     |     |                       |
  |                  *                         Srinagar:74.8   |
  |                                                            |
  |                    *                       Delhi:77.2      |
  |                              *             Kathmandu:85.2  |
  |                          *                 Varanasi:83.0   |
  |      ---\                                  Ujjain:75.8     |
  |          \//      *           *___         Calcutta:88.4   |
  |            \_/|             _/~   ~                        |
  |               |*          _/               Bombay:72.8     |
  |                \     *  _/                 Hyderabad:78.5  |
  |                 \      |                                   |
  |                  \    *|                   Madras:80.2     |
  |                   \   /                                    |
  |                    \*/ /\                  Trivandrum:77.0 |
  |                       |* |                 Colombo:79.9    |
  |            |     |     --    |     |                       |
  |            |     |           |     |                       |
  |            70          80          90                      |
   ------------------------------------------------------------ ";

/// Masa numbering for the Try questions. Bracketed numbers apply to
/// purnimanta krsnapaksa months.
pub const MASA_TABLE: &str = "
  0(11).Caitra    1( 0).Vaisakha   2( 1).Jyaistha 3( 2).Asadha
  4( 3).Sravana   5( 4).Bhadrapada 6( 5).Asvina   7( 6).Karttika
  8( 7).Margasira 9( 8).Pausa     10( 9).Magha   11(10).Phalguna
";
