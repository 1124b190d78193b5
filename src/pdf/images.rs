use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pdf_writer::{Filter, Pdf, Ref};

use crate::error::Error;

enum ImageData {
    /// JPEG bytes passed through with DCTDecode.
    Jpeg { data: Vec<u8>, gray: bool },
    /// zlib-compressed RGB samples plus an optional compressed alpha plane.
    Flate { rgb: Vec<u8>, alpha: Option<Vec<u8>> },
}

pub(super) struct StoredImage {
    pub(super) pdf_name: String,
    pub(super) pixel_width: u32,
    pub(super) pixel_height: u32,
    data: ImageData,
}

/// Images placed so far, loaded once per path.
#[derive(Default)]
pub(super) struct ImageStore {
    images: Vec<StoredImage>,
    by_path: HashMap<PathBuf, usize>,
}

impl ImageStore {
    /// Load `path` unless it was loaded before; returns its index.
    pub(super) fn load(&mut self, path: &Path) -> Result<usize, Error> {
        if let Some(&idx) = self.by_path.get(path) {
            return Ok(idx);
        }

        let t0 = std::time::Instant::now();
        let bytes = std::fs::read(path)?;
        let reader = image::ImageReader::new(std::io::Cursor::new(&bytes)).with_guessed_format()?;
        let format = reader.format();
        let decoded = reader
            .decode()
            .map_err(|e| Error::Image(format!("{}: {e}", path.display())))?;
        let (pixel_width, pixel_height) = (decoded.width(), decoded.height());

        let data = match format {
            Some(image::ImageFormat::Jpeg) => ImageData::Jpeg {
                gray: decoded.color().channel_count() < 3,
                data: bytes,
            },
            Some(image::ImageFormat::Png) => {
                let rgba = decoded.to_rgba8();
                let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);
                let rgb_data: Vec<u8> = rgba
                    .pixels()
                    .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
                    .collect();
                let alpha = has_alpha.then(|| {
                    let alpha_data: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
                    miniz_oxide::deflate::compress_to_vec_zlib(&alpha_data, 6)
                });
                ImageData::Flate {
                    rgb: miniz_oxide::deflate::compress_to_vec_zlib(&rgb_data, 6),
                    alpha,
                }
            }
            other => {
                return Err(Error::Image(format!(
                    "{}: unsupported image format {other:?}",
                    path.display()
                )));
            }
        };

        log::debug!(
            "load image: {} {}x{} → {:.1}ms",
            path.display(),
            pixel_width,
            pixel_height,
            t0.elapsed().as_secs_f64() * 1000.0,
        );

        let idx = self.images.len();
        self.images.push(StoredImage {
            pdf_name: format!("Im{}", idx + 1),
            pixel_width,
            pixel_height,
            data,
        });
        self.by_path.insert(path.to_path_buf(), idx);
        Ok(idx)
    }

    pub(super) fn get(&self, idx: usize) -> &StoredImage {
        &self.images[idx]
    }

    /// Write every loaded image as an XObject; returns (resource name, ref).
    pub(super) fn embed(&self, pdf: &mut Pdf, alloc: &mut impl FnMut() -> Ref) -> Vec<(String, Ref)> {
        let mut xobjects = Vec::with_capacity(self.images.len());
        for img in &self.images {
            let xobj_ref = alloc();
            let (w, h) = (img.pixel_width as i32, img.pixel_height as i32);
            match &img.data {
                ImageData::Jpeg { data, gray } => {
                    let mut xobj = pdf.image_xobject(xobj_ref, data);
                    xobj.filter(Filter::DctDecode);
                    xobj.width(w);
                    xobj.height(h);
                    if *gray {
                        xobj.color_space().device_gray();
                    } else {
                        xobj.color_space().device_rgb();
                    }
                    xobj.bits_per_component(8);
                }
                ImageData::Flate { rgb, alpha } => {
                    let smask_ref = alpha.as_ref().map(|alpha| {
                        let mask_ref = alloc();
                        let mut mask = pdf.image_xobject(mask_ref, alpha);
                        mask.filter(Filter::FlateDecode);
                        mask.width(w);
                        mask.height(h);
                        mask.color_space().device_gray();
                        mask.bits_per_component(8);
                        mask_ref
                    });

                    let mut xobj = pdf.image_xobject(xobj_ref, rgb);
                    xobj.filter(Filter::FlateDecode);
                    xobj.width(w);
                    xobj.height(h);
                    xobj.color_space().device_rgb();
                    xobj.bits_per_component(8);
                    if let Some(mask_ref) = smask_ref {
                        xobj.s_mask(mask_ref);
                    }
                }
            }
            xobjects.push((img.pdf_name.clone(), xobj_ref));
        }
        xobjects
    }
}
