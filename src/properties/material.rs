//! Surface and polyline materials.

use super::color::Color;
use super::uri::Uri;
use crate::enums::StripeOrientation;
use crate::error::CzmlResult;
use crate::values::{Cartesian2Value, Number};

czml_property! {
    /// A material filled with a single color.
    pub struct SolidColorMaterial / SolidColorMaterialBuilder {
        "color" => color: Color,
    }
}

impl SolidColorMaterial {
    /// A solid color material from three or four channels, see
    /// [`Color::from_list`].
    pub fn from_list<I, N>(channels: I) -> CzmlResult<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        SolidColorMaterial::builder()
            .color(Color::from_list(channels)?)
            .build()
    }
}

czml_property! {
    /// A material textured with an image.
    pub struct ImageMaterial / ImageMaterialBuilder {
        "image" => image: Uri,
        /// How many times the image repeats along each axis.
        "repeat" => repeat: Cartesian2Value,
        "color" => color: Color,
        "transparent" => transparent: bool,
    }
}

czml_property! {
    /// A material drawing a grid of lines.
    pub struct GridMaterial / GridMaterialBuilder {
        "color" => color: Color,
        "cellAlpha" => cell_alpha: Number,
        "lineCount" => line_count: Cartesian2Value,
        "lineThickness" => line_thickness: Cartesian2Value,
        "lineOffset" => line_offset: Cartesian2Value,
    }
}

czml_property! {
    /// Alternating stripes of two colors.
    pub struct StripeMaterial / StripeMaterialBuilder {
        "orientation" => orientation: StripeOrientation,
        "evenColor" => even_color: Color,
        "oddColor" => odd_color: Color,
        "offset" => offset: Number,
        "repeat" => repeat: Number,
    }
}

czml_property! {
    /// A checkerboard of two colors.
    pub struct CheckerboardMaterial / CheckerboardMaterialBuilder {
        "evenColor" => even_color: Color,
        "oddColor" => odd_color: Color,
        "repeat" => repeat: Cartesian2Value,
    }
}

czml_property! {
    /// A polyline with an outline.
    pub struct PolylineOutline / PolylineOutlineBuilder {
        "color" => color: Color,
        "outlineColor" => outline_color: Color,
        "outlineWidth" => outline_width: Number,
    }
}

czml_property! {
    /// A glowing polyline.
    pub struct PolylineGlow / PolylineGlowBuilder {
        "color" => color: Color,
        /// Strength of the glow, as a fraction of the line width.
        "glowPower" => glow_power: Number,
        /// Thinning of the line towards its ends, `1.0` for no tapering.
        "taperPower" => taper_power: Number,
    }
}

czml_property! {
    /// A polyline ending in an arrow.
    pub struct PolylineArrow / PolylineArrowBuilder {
        "color" => color: Color,
    }
}

czml_property! {
    /// A dashed polyline.
    pub struct PolylineDash / PolylineDashBuilder {
        "color" => color: Color,
        "gapColor" => gap_color: Color,
        "dashLength" => dash_length: Number,
        /// 16 bit pattern of the dash, one bit per segment.
        "dashPattern" => dash_pattern: Number,
    }
}

czml_property! {
    pub struct PolylineOutlineMaterial / PolylineOutlineMaterialBuilder {
        "polylineOutline" => polyline_outline: PolylineOutline,
    }
}

czml_property! {
    pub struct PolylineGlowMaterial / PolylineGlowMaterialBuilder {
        "polylineGlow" => polyline_glow: PolylineGlow,
    }
}

czml_property! {
    pub struct PolylineArrowMaterial / PolylineArrowMaterialBuilder {
        "polylineArrow" => polyline_arrow: PolylineArrow,
    }
}

czml_property! {
    pub struct PolylineDashMaterial / PolylineDashMaterialBuilder {
        "polylineDash" => polyline_dash: PolylineDash,
    }
}

czml_property! {
    /// The material of a surface.
    pub struct Material / MaterialBuilder {
        "solidColor" => solid_color: SolidColorMaterial,
        "image" => image: ImageMaterial,
        "grid" => grid: GridMaterial,
        "stripe" => stripe: StripeMaterial,
        "checkerboard" => checkerboard: CheckerboardMaterial,
    }
}

czml_property! {
    /// The material of a polyline.
    pub struct PolylineMaterial / PolylineMaterialBuilder {
        "solidColor" => solid_color: SolidColorMaterial,
        "image" => image: ImageMaterial,
        "grid" => grid: GridMaterial,
        "stripe" => stripe: StripeMaterial,
        "checkerboard" => checkerboard: CheckerboardMaterial,
        "polylineOutline" => polyline_outline: PolylineOutline,
        "polylineArrow" => polyline_arrow: PolylineArrow,
        "polylineDash" => polyline_dash: PolylineDash,
        "polylineGlow" => polyline_glow: PolylineGlow,
    }
}

impl From<Material> for PolylineMaterial {
    fn from(material: Material) -> Self {
        PolylineMaterial {
            solid_color: material.solid_color,
            image: material.image,
            grid: material.grid,
            stripe: material.stripe,
            checkerboard: material.checkerboard,
            ..empty_polyline_material()
        }
    }
}

impl From<PolylineOutlineMaterial> for PolylineMaterial {
    fn from(material: PolylineOutlineMaterial) -> Self {
        PolylineMaterial {
            polyline_outline: material.polyline_outline,
            ..empty_polyline_material()
        }
    }
}

impl From<PolylineGlowMaterial> for PolylineMaterial {
    fn from(material: PolylineGlowMaterial) -> Self {
        PolylineMaterial {
            polyline_glow: material.polyline_glow,
            ..empty_polyline_material()
        }
    }
}

impl From<PolylineArrowMaterial> for PolylineMaterial {
    fn from(material: PolylineArrowMaterial) -> Self {
        PolylineMaterial {
            polyline_arrow: material.polyline_arrow,
            ..empty_polyline_material()
        }
    }
}

impl From<PolylineDashMaterial> for PolylineMaterial {
    fn from(material: PolylineDashMaterial) -> Self {
        PolylineMaterial {
            polyline_dash: material.polyline_dash,
            ..empty_polyline_material()
        }
    }
}

fn empty_polyline_material() -> PolylineMaterial {
    PolylineMaterial {
        solid_color: None,
        image: None,
        grid: None,
        stripe: None,
        checkerboard: None,
        polyline_outline: None,
        polyline_arrow: None,
        polyline_dash: None,
        polyline_glow: None,
    }
}
