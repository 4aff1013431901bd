#![no_main]

use dotmeta::metadata::{streams::TablesStream, tables::TypeDefRaw};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut stream) = TablesStream::from(data) {
        let _ = stream.table::<TypeDefRaw>().and_then(|table| table.rows().map(<[_]>::len));
        let _ = stream.field_range(1);
        let _ = stream.write();
    }
});
