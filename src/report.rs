//! The built-in report: the organisational carbon footprint (CFO) report of the
//! Betagro Lopburi feed mills, as a [`Report`] value.

use std::path::PathBuf;

use crate::model::{
    Advance, Align, Block, Border, FontSource, FooterCell, GridCell, PageGeometry, Report,
    RunningFooter, RunningHeader,
};

const FAMILY: &str = "THSarabunNew";
const TITLE: &str = "รายงานการปล่อยและดูดกลับก๊าซเรือนกระจก";
const ORGANIZATION: &str = "บริษัท เบทาโกร จำกัด (มหาชน) โรงงานผลิตอาหารสัตว์ จ.ลพบุรี 1,2 และ 3";
const REVIEWER: &str = "บริษัท อีซีอีอี จำกัด";

const HEADER_FILL: [u8; 3] = [190, 190, 190];
const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];
const BLUE: [u8; 3] = [0, 0, 255];
const RED: [u8; 3] = [255, 0, 0];

const INTRODUCTION: &str = "จากผลกระทบของภาวะโลกร้อน ทำให้ประเทศต่างๆ ทั่วโลกตื่นตัวในการดำเนินงานเพื่อลดการปล่อยก๊าซเรือนกระจก แนวคิดการจัดทำคาร์บอนฟุตพริ้นท์ขององค์กร (Carbon Footprint for Organization: CFO) เป็นวิธีการประเมินปริมาณก๊าซเรือนกระจกที่ปล่อยจากกิจกรรมทั้งหมดขององค์กรและคำนวณออกมาในรูปคาร์บอนไดออกไซด์เทียบเท่า อันจะนำไปสู่การกำหนดแนวทางการบริหารจัดการ เพื่อลดการปล่อยก๊าซเรือนกระจกได้อย่างมีประสิทธิภาพทั้งในระดับหน่วยงาน บริษัท หรือโรงงาน ระดับอุตสาหกรรม และระดับประเทศ ";

const SIGNIFICANCE_NOTES: [&str; 2] = [
    "หมายเหตุ :  1. มีนัยสำคัญ “มาก” หมายถึง มีปริมาณการปล่อยก๊าซเรือนกระจกตั้งแต่ร้อยละ 5 ของปริมาณการปล่อยก๊าซเรือนกระจกรวมประเภทที่ 1+2 ขององค์กร",
    "2. มีนัยสำคัญ “น้อย” หมายถึง มีปริมาณการปล่อยก๊าซเรือนกระจกน้อยกว่าร้อยละ 5 ของปริมาณการปล่อยก๊าซเรือนกระจกรวมประเภทที่ 1+2 ขององค์กร",
];

const APPENDIX: [&str; 6] = [
    "ตามข้อก าหนดของ อบก. ก าหนดให้องค์กรมีกระบวนการชี ้บ่งแหล่งปล่อยก๊าซเรือนกระจกทางอ้อมอื ่นๆ (ประเภทที ่ 3) ที ่จะน ามารวมในบัญชีรายการก๊าซเรือนกระจก โดยให้ความส าคัญของแหล่งการปล่อยก๊าซเรือนกระจกตามหลักเกณฑ์ดังต่อไปนี ้ ",
    "- ขนาด (Magnitude): เป็นกิจกรรมการปล่อยหรือดูดกลับก๊าซเรือนกระจกทางอ้อมซึ่่งถูกสันนิษฐานว่ามีปริมาณการปล่อยหรือดูดกลับก๊าซเรือนกระจกในปริมาณมากอย่างมีนัยส าคัญ ",
    "- ระดับของแรงจูงใจ(Level of influence): เป็นกิจกรรมการปล่อยหรือดูดกลับก๊าซเรือนกระจกที ่องค์กรมีความสามารถในการตรวจติดตามและลดปริมาณการปล่อยหรือดูดกลับก๊าซเรือนกระจกจากกิจกรรมนั ้น(ตัวอย่างเช่นเป็นกิจจกรรมที ่เกี ่ยวข้องกับการประเมินประสิทธิภาพพลังงาน การออกแบบ ชิงนิเวศเศรษฐกิจ, เกี ่ยวข้องกับข้อตกลงที ่มีกับลูกค้า, เกี ่ยวข้องกับข้อก าหนดขอบเขตงานจากผู ้ว่าจ้าง)",
    "- ความเสี ่ยงหรือโอกาส (Risk or opportunity): เป็นกิจกรรมการปล่อยหรือดูดกลับก๊าซเรือนกระจกทางอ้อมซึ ่งมีส่วนท าให้องค์กรได้รับความเสี ่ยง (ตัวอย่างของความเสี ่ยงที ่มีความเชื ่อมโยงกับการเปลี ่ยนแปลงสภาพภูมิอากาศ เช่น ความเสี ่ยงทางด้านการเงิน, ความเสี ่ยงทางด้านกฎระเบียบข้อบังคับ, \nความเสี ่ยงตลอดห่วงโซ่อุปทาน, ความเสี ่ยงเกี ่ยวกับสินค้าและลูกค้า, ความเสี ่ยงเกี ่ยวกับการด าเนินคดี และ ความเสี ่ยงด้านชื ่อเสียง) หรือได้รับโอกาสต่างๆ ทางธุรกิจ (เช่น การเข้าสู ่ช่องทางตลาดใหม่ การเข้าสู ่ระบบธุรกิจในรูปแบบใหม่) ",
    "- เป็นการจัดจ้างบุคคลหรือหน่วยงานภายนอก (Outsourcing): เป็นกิจกรรมการปล่อยและดูดกลับก๊าซเรือนกระจกทางอ้อมที ่เกิดจากการจัดจ้างบุคคลหรือหน่วยงานภายนอกเข้ามาด าเนินกิจกรรมที ่ถือว่าเป็นกิจกรรมหลักในการด าเนินธุรกิจขององค์กร  ",
    "- เป็นการส่งเสริมการมีส่วนร่วมของพนักงาน (Employee engagement): เป็นกิจกรรมการปล่อยก๊าซเรือนกระจกทางอ้อมที ่สามารถส่งเสริมให้เกิดการกระตุ ้นให้พนักงานมีส่วนร่วมในการลดการปล่อยก๊าซเรือนกระจก ผ่านการลดการใช้พลังงาน หรือการท างานร่วมกันเป็นทีมภายใต้หลักคิดที ่เกี ่ยวข้องกับการเปลี ่ยนแปลงสภาพภูมิอากาศ (เช่น การสร้างแรงจูงใจในการอนุรักษ์พลังงาน, การเดินทางโดยใช้รถร่วมกัน, การประเมินราคาคาร์บอนภายในองค์กร เป็นต้น)  ",
];

fn rows<const N: usize>(data: &[[&str; N]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn header_cell(width: f32, line_height: f32, text: &str) -> GridCell {
    GridCell {
        width,
        line_height,
        text: text.to_string(),
        border: Border::ALL,
        align: Align::Center,
        fill: true,
    }
}

fn body_cell(width: f32, line_height: f32, text: &str) -> GridCell {
    GridCell {
        fill: false,
        ..header_cell(width, line_height, text)
    }
}

#[derive(Default)]
struct ContentBuilder {
    blocks: Vec<Block>,
}

impl ContentBuilder {
    fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    fn font(&mut self, bold: bool, size: f32) -> &mut Self {
        self.push(Block::Font { bold, size })
    }

    fn text_color(&mut self, rgb: [u8; 3]) -> &mut Self {
        self.push(Block::TextColor { rgb })
    }

    fn fill_color(&mut self, rgb: [u8; 3]) -> &mut Self {
        self.push(Block::FillColor { rgb })
    }

    fn page_break(&mut self) -> &mut Self {
        self.push(Block::PageBreak)
    }

    fn space(&mut self, height: f32) -> &mut Self {
        self.push(Block::Space {
            height: Some(height),
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn line(
        &mut self,
        width: f32,
        height: f32,
        text: &str,
        border: Border,
        align: Align,
        fill: bool,
        advance: Advance,
    ) -> &mut Self {
        self.push(Block::Line {
            text: text.to_string(),
            width,
            height,
            border,
            align,
            fill,
            advance,
        })
    }

    /// Full-width left-aligned line, cursor to the next line.
    fn heading(&mut self, text: &str) -> &mut Self {
        self.line(0.0, 10.0, text, Border::NONE, Align::Left, false, Advance::NextLine)
    }

    fn centered(&mut self, height: f32, text: &str) -> &mut Self {
        self.line(0.0, height, text, Border::NONE, Align::Center, false, Advance::Below)
    }

    fn note(&mut self, text: &str, fill: bool) -> &mut Self {
        self.line(45.0, 7.5, text, Border::NONE, Align::Left, fill, Advance::Below)
    }

    fn wrapped(&mut self, text: &str) -> &mut Self {
        self.push(Block::Wrapped {
            text: text.to_string(),
            width: 0.0,
            line_height: 10.0,
            border: Border::NONE,
            align: Align::Left,
            fill: false,
        })
    }

    /// Body paragraph in the regular body font.
    fn paragraph(&mut self, text: &str, indent: bool) -> &mut Self {
        self.font(false, 14.0).push(Block::Paragraph {
            text: text.to_string(),
            indent,
        })
    }

    /// Paginated table in the regular body font.
    fn table(&mut self, column_widths: &[f32], rows: Vec<Vec<String>>) -> &mut Self {
        self.font(false, 14.0).push(Block::Table {
            column_widths: column_widths.to_vec(),
            rows,
        })
    }

    fn grid(&mut self, cells: Vec<GridCell>) -> &mut Self {
        self.push(Block::Grid { cells })
    }

    fn stacked_image(&mut self, file: &str, width: f32, height: f32) -> &mut Self {
        self.push(Block::Images {
            files: vec![PathBuf::from(file)],
            width,
            height,
            gap: 15.0,
            stacked: true,
        })
    }

    fn caption(&mut self, text: &str) -> &mut Self {
        self.font(true, 14.0)
            .line(0.0, 10.0, text, Border::NONE, Align::Center, false, Advance::NextLine)
    }

    fn labelled(&mut self, label_width: f32, label: &str, value: &str) -> &mut Self {
        self.font(true, 20.0)
            .line(label_width, 10.0, label, Border::NONE, Align::Left, false, Advance::Right)
            .font(false, 20.0)
            .line(0.0, 10.0, value, Border::NONE, Align::Left, false, Advance::NextLine)
    }

    /// Column headings shared by the emission source grids of section 3.2.
    fn emission_source_header(&mut self) -> &mut Self {
        self.fill_color(HEADER_FILL).grid(vec![
            header_cell(20.0, 60.0, "Facility "),
            header_cell(
                50.0,
                15.0,
                "แหล่งปล่อยก๊าซเรือนกระจก (Emission Source) เช่น ระบุ อุปกรณ์หลัก/ เครื่องจักร / กระบวนการ/กิจกรรม ",
            ),
            header_cell(30.0, 60.0, "ที่ตั้ง/ตำแหน่ง"),
            header_cell(20.0, 60.0, "ใช้ภายใน "),
            header_cell(20.0, 30.0, "จำหน่ายภายนอก"),
            header_cell(30.0, 20.0, "ความสำคัญ (มีนัยสำคัญมาก หรือ น้อย) "),
        ])
    }

    fn emission_source_row(&mut self, line_height: f32, cells: [&str; 6]) -> &mut Self {
        let widths = [20.0, 50.0, 30.0, 20.0, 20.0, 30.0];
        self.grid(
            widths
                .iter()
                .zip(cells)
                .map(|(&w, text)| body_cell(w, line_height, text))
                .collect(),
        )
    }

    fn significance_notes(&mut self) -> &mut Self {
        self.font(false, 10.0);
        for text in SIGNIFICANCE_NOTES {
            self.note(text, false);
        }
        self
    }

    fn build(&mut self) -> Vec<Block> {
        std::mem::take(&mut self.blocks)
    }
}

fn cover(b: &mut ContentBuilder) {
    b.font(true, 28.0).centered(10.0, TITLE).space(10.0);
    b.push(Block::Images {
        files: vec![PathBuf::from("rabbit.jpg"); 4],
        width: 45.0,
        height: 45.0,
        gap: 5.0,
        stacked: false,
    })
    .space(60.0);

    b.font(true, 20.0)
        .line(25.0, 10.0, "ชื่อองค์กร : ", Border::NONE, Align::Left, false, Advance::Right)
        .font(false, 20.0)
        .wrapped(ORGANIZATION)
        .font(true, 20.0)
        .line(50.0, 10.0, "ที่อยู่/สถานที่ตั้งองค์กร : ", Border::NONE, Align::Left, false, Advance::Right)
        .font(false, 20.0)
        .wrapped("เลขที่ 3 หมู่ 13 ถ.สระบุรี-หล่มสัก ต.ช่องสาริกา อ.พัฒนานิคม จ.ลพบุรี")
        .labelled(35.0, "วันที่รายงานผล : ", "28 มิ.ย. 2566")
        .labelled(55.0, "ระยะเวลาในการติดตามผล : ", "มกราคม ถึง ธันวาคม 2565")
        .space(20.0);

    b.font(true, 18.0)
        .centered(0.0, "เพื่อการทวนสอบและรับรองผลคาร์บอนฟุตพริ้นท์ขององค์กร")
        .space(10.0)
        .centered(0.0, "โดย องค์การบริหารจัดการก๊าซเรือนกระจก (องค์การมหาชน)")
        .space(50.0);
}

fn introduction(b: &mut ContentBuilder) {
    b.font(true, 16.0)
        .heading("1. บทนำ")
        .line(0.0, 8.0, "", Border::NONE, Align::Center, false, Advance::NextLine);
    for _ in 0..3 {
        b.paragraph(INTRODUCTION, true);
    }
    b.paragraph(
        "กรกฎาคม 2565) ขององค์การบริหารจัดการก๊าซเรือนกระจก (องค์การมหาชน) และขอรับการทวนสอบข้อมูลเป็นระดับการทวนสอบแบบจำกัด (Limited level of assurance) และมีความมีสาระสำคัญ(Materiality) 5% ",
        false,
    );
}

fn general_information(b: &mut ContentBuilder) {
    b.page_break()
        .font(true, 16.0)
        .heading("2. ข้อมูลทั่วไป ")
        .line(0.0, 8.0, "", Border::NONE, Align::Center, false, Advance::NextLine);
    b.table(
        &[60.0, 120.0],
        rows(&[
            ["2.1 ชื่อองค์กร ", "บริษัท เบทาโกร จำกัด (มหาชน) โรงงานผลิตอาหารสัตว์ จ.ลพบุรี 1,2 และ 3 "],
            ["2.2 ที่อยู่/สถานที่ตั้งองค์กร ", "เลขที่ 3 หมู่ 13 ถ.สระบุรี-หล่มสัก ต.ช่องสาริกา อ.พัฒนานิคม จ.ลพบุรี"],
            ["2.3 ประเภทของอุตสาหกรรม ", "ผู้ผลิตอาหารสัตว์ "],
            ["2.4 ชื่อ-สกุลของผู้ประสานงาน ", "1.คุณวนิตา ทัลวัลลิ์ \n2.คุณสุวรรณา แก้วกล่ำ "],
            ["2.5 ชื่อ-สกุลของผู้รับผิดชอบข้อมูล ", "1.คุณเบญจมา กลีบทอง \n2.คุณจีรประภา วงษ์พาศกลาง \n3.คุณปพิภากาญจณ์ สุวรรณวงษ์"],
            ["2.6 ระยะเวลาติดตามผล ", "มกราคม ถึง ธันวาคม 2565 "],
            ["2.7 แนวทางที่ใช้ในการติดตามผล ", "ข้อกำหนดในการคำนวณและรายงานคาร์บอนฟุตพริ้นท์ขององค์กร พิมพ์ครั้งที่ 8 (ฉบับปรับปรุงครั้งที่ 6 กรกฎาคม 2565)  "],
            ["2.8 ระดับของการรับรอง (Level of Assurance)", "แบบจำกัด (Limited Assurance)"],
            ["2.9 ระดับความมีสาระสำคัญ (Materiality Threshold)  ", "5% Materiality"],
        ]),
    );
}

fn organizational_boundary(b: &mut ContentBuilder) {
    b.page_break()
        .font(true, 16.0)
        .heading("3. ขอบเขต  ")
        .heading(" 3.1 ขอบเขตขององค์กร ");
    b.table(
        &[60.0, 120.0],
        rows(&[
            ["1) แนวทางที่ใช้กำหนดขอบเขตองค์กร ", "ควบคุมดำเนินงาน (OPERATIONAL CONTROL) "],
            ["2) หน่วยสาธารณูปโภค (Facility)/พื้นที่ที่ครอบคลุมในรายงาน ", "1. บริษัท เบทาโกร จำกัด (มหาชน)  โรงงานลพบุรี 1 \n2. บริษัท เบทาโกร จำกัด (มหาชน)  โรงงานลพบุรี 2 \n3. บริษัท เบทาโกร จำกัด (มหาชน)  โรงงานลพบุรี 3"],
            ["3) เอกสารยืนยันขอบเขต ", "โรงงานลพบุรี 1,2,3 : ใบอนุญาตประกอบกิจการโรงงานเลขที ่ :  ส3-15(1)-1/34ลบ "],
        ]),
    );

    b.page_break()
        .font(true, 16.0)
        .heading("3.1.1 โครงสร้างขององค์กร")
        .stacked_image("companyStructure.png", 150.0, 0.0);

    b.page_break()
        .font(true, 16.0)
        .heading("3.1.2 แผนผังของโรงงาน ")
        .stacked_image("companyMap.png", 0.0, 180.0);

    b.page_break()
        .font(true, 16.0)
        .heading("3.1.3 แผนผังกระบวนการผลิต ")
        .stacked_image("productionMap.png", 150.0, 0.0)
        .caption("รูปแสดง : แผนผังการผลิต บริษัท เบทาโกร จำกัด (มหาชน)  โรงงานลพบุรี 1")
        .stacked_image("productionMap1.png", 150.0, 0.0)
        .caption("รูปแสดง : แผนผังการผลิต บริษัท เบทาโกร จำกัด (มหาชน)  โรงงานลพบุรี 2");

    b.page_break()
        .stacked_image("productionMap2.png", 150.0, 0.0)
        .caption("รูปแสดง : แผนผังการผลิต บริษัท เบทาโกร จำกัด (มหาชน)  โรงงานลพบุรี 3");

    b.font(true, 16.0)
        .heading("3.1.4 ระบุกิจกรรมทั้งหมดขององค์กร  ")
        .text_color(BLUE)
        .font(true, 14.0)
        .heading("จำแนกกิจกรรมขององค์กรในแต่ละ Facility  (ใส่หมายเลขและชื่อ Facility ในข้อ 3.1.2) ตามแผนผังให้ครอบคลุมทุก Scopes ")
        .text_color(BLACK);

    let facility_top = Border {
        left: true,
        top: true,
        right: false,
        bottom: false,
    };
    let facility_bottom = Border {
        left: true,
        top: false,
        right: false,
        bottom: true,
    };
    b.font(false, 12.0)
        .fill_color(HEADER_FILL)
        .grid(vec![
            GridCell {
                border: facility_top,
                ..header_cell(50.0, 15.0, "Facility ")
            },
            header_cell(120.0, 15.0, "กิจกรรมขององค์กรในแต่ละ Facility "),
        ])
        .grid(vec![
            GridCell {
                border: facility_bottom,
                ..header_cell(50.0, 7.5, "")
            },
            header_cell(50.0, 7.5, "Scope 1 "),
            header_cell(25.0, 7.5, "Scope 2 "),
            header_cell(45.0, 7.5, "Scope 3"),
        ])
        .fill_color(WHITE);
    b.table(
        &[50.0, 50.0, 25.0, 45.0],
        rows(&[
            ["1. บริษัท เบทาโกร จำกัด (มหาชน)  โรงงานลพบุรี 1 (LR1)", "1. การเผาไหม้น้ำมันดีเซลรถยนต์ ", "1. การใช้ไฟฟ้า ", "1. Purchased goods and services "],
            ["", "2. การเผาไหม้น้ำมันเบนซีนรถยนต์ ", "", "2. Fuel- and energy related activities not included scope 1 & 2"],
            ["", "3. การเผาไหม้ก๊าซ LPG สำหรับรถยนต์", "", "3. Upstream transport "],
            ["", "4. การเผาไหม้ก๊าซ NGV สำหรับรถยนต", "", "4. Waste generate"],
            ["", "5. การเผาไหม้น้ำมันดีเซล generator + fire pump ", "", "5. Downstream transport"],
            ["", "6. การเผาไหม้น้ำมันดีเซลเครื่องตัดหญ้า ", "", ""],
            ["", "7. การเผาไหม้น้ำมันเตา C Boiler และการอบข้าวโพด", "", "4. Waste generate"],
        ]),
    );
    b.font(false, 10.0)
        .note("หมายเหตุ *กิจกรรมขององค์กรใน Scope 3 ที่ไม่รวมไว้ในการติดตามผล ", true);

    b.page_break()
        .font(true, 16.0)
        .wrapped("3.1.5 ระบุขอบเขตขององค์กรที่เพิ่มเข้ามาหรือขอบเขตที่ไม่รวม (ระบุ Facility) ที่เพิ่มเข้ามาหรือไม่นับรวม) พร้อมเหตุผล")
        .paragraph(
            "1. ไม่นับรวมการปล่อยก๊าซเรือนกระจกการใช้ก๊าซ LPG กิจกรรมซ่อมบำรุง โรงงานลพบุรี 1 ,2 เนื่องจากมีการใช้งานน้อยมาก มีอายุการใช้งานมากกว่า 1 ปี ",
            true,
        );
}

fn operational_boundary(b: &mut ContentBuilder) {
    b.font(true, 16.0).wrapped("3.2 ขอบเขตการดำเนินงาน");
    b.table(
        &[60.0, 120.0],
        rows(&[
            ["1) ก๊าซเรือนกระจกที่พิจารณา ", "- คำร์บอนไดออกไซด์ (CO2)\n- มีเทน (CH4) \n- ไนตรัสออกไซด์ (N2O) \n- ไฮโดรฟลูออโรคำร์บอน (HFCs) \n- เพอร์ฟลูออโรคำร์บอน (PFCs) \n- ซัลเฟอร์เฮกซะฟลูออไรด์ (SF6) \n- ไนโตรเจนไตรฟลูออไรด์ (NF3)"],
            ["2) ก๊าซเรือนกระจกที่พิจารณาอื่น ๆเพิ่มเติม ", "-"],
            ["3) GWP ", "- IPCC Fifth Assessment Report (AR5)  "],
        ]),
    );

    b.page_break()
        .font(true, 14.0)
        .wrapped("3.2.1   ระบุกิจกรรมที่เป็นแหล่งปล่อยก๊าซเรือนกระจกประเภทที่1 ขององค์กร ")
        .emission_source_header()
        .fill_color(WHITE);
    for category in ["Mobile Combustion ", "Stationary Combustion "] {
        b.line(170.0, 10.0, category, Border::ALL, Align::Left, true, Advance::NextLine)
            .emission_source_row(15.0, ["LR1,2,3  ", "1. น้ำมันดีเซลรถยนต์  ", "-", " ", "", "น้อย"]);
    }
    b.significance_notes();

    b.page_break()
        .font(true, 14.0)
        .wrapped("3.2.2 แหล่งปล่อยก๊าซเรือนกระจกทางตรงที่เกี่ยวข้องกับการใช้ชีวมวลและก๊าซชีวภาพ เพื่อทดแทนการใช้พลังงานและความร้อน  ")
        .text_color(BLUE)
        .wrapped("พิจารณาเฉพาะที่มาจากพืช ของเสียอุตสาหกรรม และของเสียทั่วไป อ้างอิงตาม EB 23 Report Annex 18, DEFINITION OF RENEWABLE BIOMASS")
        .text_color(BLACK)
        .emission_source_header()
        .emission_source_row(10.0, [" ", "-ไม่มี-", "", " ", "", ""]);

    b.page_break()
        .font(true, 14.0)
        .wrapped("3.2.5 พลังงาน/ความร้อน/ไอน้ำที่จำหน่ายให้หน่วยงานภายนอก (Supply to External) (นอกขอบเขตการดำเนินงาน) (out of boundary) ");
    b.table(
        &[60.0, 120.0],
        rows(&[
            ["อุปกรณ์ / เครื่องจักรที่ผลิตพลังงาน / ความร้อน / ไอน้ำ / กระบวนการ (Source)  ", "จำหน่ายให้กับ (Supply to) "],
            ["-ไม่มี-", " "],
        ]),
    );

    b.page_break()
        .font(true, 14.0)
        .wrapped("3.2.7 การกักเก็บคาร์บอน")
        .fill_color(HEADER_FILL)
        .grid(vec![
            header_cell(40.0, 15.0, "รายชื่อกระบวนการ (Sink / Reservoir) "),
            header_cell(40.0, 15.0, "กำลังการผลิต (Capacity)"),
            header_cell(40.0, 15.0, "ที่ตั้ง/ตำแหน่ง"),
            header_cell(40.0, 15.0, "ความสำคัญ (มีนัยสำคัญมาก หรือ น้อย) "),
        ])
        .grid(vec![
            body_cell(40.0, 10.0, " -ไม่มี-"),
            body_cell(40.0, 10.0, ""),
            body_cell(40.0, 10.0, ""),
            body_cell(40.0, 10.0, " "),
        ]);
}

fn emissions(b: &mut ContentBuilder) {
    b.page_break()
        .font(true, 16.0)
        .heading("4. การติดตามผล  ")
        .text_color(RED)
        .wrapped("จุดที่ตรวจวัด หมายถึง ตำแหน่งมิเตอร์ (อ้างอิงแผนผังมิเตอร์หรืออุปกรณ์ตรวจวัด ในภาคผนวก 1) หรือ จุดที่มีการบันทึกข้อมูล (อ้างอิงตามโครงสร้างระบบการจัดการคุณภาพของข้อมูลในข้อ 7.1) ")
        .text_color(BLACK);

    b.page_break()
        .font(true, 16.0)
        .heading("5.2 การปล่อยก๊าซเรือนกระจก จากขอบเขตการด าเนินงานประเภทที ่ 2 ");
    b.table(
        &[60.0, 120.0],
        rows(&[
            ["แหล่งปล่อยก๊าซเรือนกระจก ", "ปริมาณการปล่อย GHG (Ton CO2e)"],
            ["การใช้ไฟฟ้า", "28,252.52 "],
            ["รวมทั ้งหมด ", "28,253 "],
        ]),
    );

    b.page_break()
        .font(true, 16.0)
        .heading("5.3 การปล่อยก๊าซเรือนกระจก จากขอบเขตการด าเนินงานประเภทที ่ 3");
    b.table(
        &[60.0, 120.0],
        rows(&[
            ["แหล่งปล่อยก๊าซเรือนกระจก ", "ปริมาณการปล่อย GHG (Ton CO2e)"],
            ["1. Purchased goods and services ", "1,269,288.86"],
            ["2. Fuel and energy related activities not included scope 1 & 2", "8,018.48"],
            ["3. Upstream transport ", "83,586.95 "],
            ["4. Waste generate ", "263.95"],
            ["5. Downstream transport ", "19,068.44"],
            ["รวมทั ้งหมด ", "1,380,227"],
        ]),
    );

    b.font(true, 16.0)
        .wrapped("5.5 Carbon Intensity ")
        .fill_color(HEADER_FILL)
        .grid(vec![
            header_cell(50.0, 15.0, "แหล่งปล่อยก๊าซเรือนกระจก  "),
            header_cell(50.0, 15.0, "ปริมาณ"),
            header_cell(50.0, 15.0, "หน่วย "),
        ])
        .grid(vec![
            body_cell(50.0, 6.0, "ประเภทที่ 1"),
            body_cell(50.0, 6.0, "45,065.00"),
            body_cell(50.0, 6.0, "Ton CO2e"),
        ]);

    b.text_color(BLACK)
        .font(true, 16.0)
        .heading("6. ปีฐาน ")
        .heading(" 6.1 ปีฐานที ่ใช้ในการอ้างอิง ")
        .paragraph(
            "มกราคม ถึง ธันวาคม 2564 ซึ ่งเป็นข้อมูลที ่ได้รับการทวนสอบความถูกต้องจากผู ้ทวนสอบเรียบร้อยแล้ว โดยคลอบคลุมพื ้นที ่ รายละเอียดตามรายงานข้อ 3.1.4 ของรายงานฉบับนี ้",
            true,
        );
}

fn data_quality(b: &mut ContentBuilder) {
    let header = [
        "หลักฐานอ้างอิง ",
        "การบันทึกข้อมูล",
        "การตรวจสอบข้อมูล",
        "การรวบรวมข้อมูลคำนวณ CFO",
    ];

    b.page_break()
        .font(true, 16.0)
        .heading("7. การจัดการคุณภาพของข้อมูล")
        .heading(" 7.2 ก๊าซ NGV for Boiler");
    b.table(
        &[40.0, 40.0, 40.0, 40.0],
        rows(&[
            header,
            [
                "1.ยอดเบิกจากระบบ SAP\n2.ค่าความร้อนจาก Supplier",
                "เจ้าหน้าที่สโตร์ ความถี่ : เดือนละ 1 ครั้ง",
                "ผู้จัดการผลิต \n ความถี่ : เดือนละ 1 ครั้ง",
                "เจ้าหน้าที่สิ่งแวดล้อม\nความถี่ : เดือนละ 1 ครั้ง",
            ],
        ]),
    );

    b.page_break().font(true, 16.0).heading(" 2.6 ก๊าซ LPG for Boiler");
    b.table(
        &[40.0, 40.0, 40.0, 40.0],
        rows(&[
            header,
            [
                "ยอดเบิกใช้จากระบบ SAP LR3",
                "เจ้าหน้าที่สโตร์ ความถี่ : ทุกครั้งที่มีการเบิก",
                "ผู้จัดการผลิต \n ความถี่ : เดือนละ 1 ครั้ง",
                "เจ้าหน้าที่สิ่งแวดล้อม\nความถี่ : เดือนละ 1 ครั้ง",
            ],
        ]),
    );
}

fn appendix(b: &mut ContentBuilder) {
    b.page_break()
        .font(true, 16.0)
        .line(0.0, 10.0, "ภาคผนวก", Border::NONE, Align::Center, false, Advance::NextLine);
    for text in APPENDIX {
        b.paragraph(text, true);
    }
}

/// The Betagro Lopburi feed-mill report: a cover page followed by the numbered
/// sections and the appendix. Assets (fonts, images) are referenced by file
/// name relative to the assets directory.
pub fn builtin_report() -> Report {
    let mut b = ContentBuilder::default();
    cover(&mut b);
    b.push(Block::Margins { margin: 20.0 }).page_break();
    introduction(&mut b);
    general_information(&mut b);
    organizational_boundary(&mut b);
    operational_boundary(&mut b);
    emissions(&mut b);
    data_quality(&mut b);
    appendix(&mut b);

    Report {
        title: TITLE.to_string(),
        font_family: FAMILY.to_string(),
        fonts: vec![
            FontSource {
                family: FAMILY.to_string(),
                bold: false,
                file: PathBuf::from("THSarabunNew.ttf"),
            },
            FontSource {
                family: FAMILY.to_string(),
                bold: true,
                file: PathBuf::from("THSarabunNew Bold.ttf"),
            },
        ],
        initial_margin: 50.0,
        geometry: PageGeometry::default(),
        header: Some(RunningHeader {
            title: TITLE.to_string(),
            form_code: "TCFO_R_02 Version 03.00 24/4/2019".to_string(),
            organization_label: "องค์กร".to_string(),
            organization: ORGANIZATION.to_string(),
            reviewer_label: "หน่วยงานสอบทาน".to_string(),
            reviewer: REVIEWER.to_string(),
            page_label: "หน้าที่".to_string(),
        }),
        footer: Some(RunningFooter {
            offset_from_bottom: 30.0,
            font_size: 14.0,
            row_height: 7.0,
            cells: vec![
                FooterCell {
                    width: 25.0,
                    text: "จัดทำโดย".to_string(),
                    align: Align::Center,
                },
                FooterCell {
                    width: 65.0,
                    text: "สภาอุตสาหกรรมแห่งประเทศไทย".to_string(),
                    align: Align::Left,
                },
                FooterCell {
                    width: 25.0,
                    text: "ผู้ทวนสอบ".to_string(),
                    align: Align::Center,
                },
                FooterCell {
                    width: 50.0,
                    text: REVIEWER.to_string(),
                    align: Align::Center,
                },
            ],
        }),
        blocks: b.build(),
    }
}
