use std::fs;
use std::io::Cursor;
use std::path::Path;

use beyging_core::frequency::UnigramCounts;
use beyging_core::lexicon::BinLexicon;

const LEXICON_CSV: &str = "\
hestur;1;kk;alm;hestur;NFET
hestur;1;kk;alm;hest;ÞFET
hestur;1;kk;alm;hesti;ÞGFET
hestur;1;kk;alm;hests;EFET
hestur;1;kk;alm;hestar;NFFT
hestur;1;kk;alm;hesta;ÞFFT
hestur;1;kk;alm;hestum;ÞGFFT
hestur;1;kk;alm;hesta;EFFT
hestur;1;kk;alm;hesturinn;NFETgr
gull;4;hk;alm;gull;NFET
gull;4;hk;alm;gull;ÞFET
gull;4;hk;alm;gulli;ÞGFET
gull;4;hk;alm;gulls;EFET
buxur;30;kvk;alm;buxur;NFFT
buxur;30;kvk;alm;buxur;ÞFFT
buxur;30;kvk;alm;buxum;ÞGFFT
buxur;30;kvk;alm;buxna;EFFT
ver;5;kk;alm;ver;NFET
ver;6;hk;alm;ver;NFET
Jón;9;kk;ism;Jón;NFET
góður;20;lo;alm;góður;FSB-KK-NFET
góður;20;lo;alm;góðan;FSB-KK-ÞFET
góður;20;lo;alm;góðum;FSB-KK-ÞGFET
góður;20;lo;alm;góðs;FSB-KK-EFET
góður;20;lo;alm;góðir;FSB-KK-NFFT
góður;20;lo;alm;góða;FSB-KK-ÞFFT
góður;20;lo;alm;góðum;FSB-KK-ÞGFFT
góður;20;lo;alm;góðra;FSB-KK-EFFT
góður;20;lo;alm;góð;FSB-KVK-NFET
góður;20;lo;alm;góðar;FSB-KVK-NFFT
góður;20;lo;alm;gott;FSB-HK-NFET
fallegur;22;lo;alm;fallegur;FSB-KK-NFET
gar;23;lo;alm;gar;FSB-KK-NFET
";

pub(crate) fn lexicon() -> BinLexicon {
    BinLexicon::from_reader(Cursor::new(LEXICON_CSV)).unwrap()
}

pub(crate) fn frequencies() -> UnigramCounts {
    UnigramCounts::from_reader(Cursor::new("hestur\t150\nhest\t30\ngóður\t5\nver\t900\n")).unwrap()
}

pub(crate) fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}
