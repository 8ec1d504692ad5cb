//! Phong lighting parameters and the uniforms they map to.
//!
//! The uniform names match the `lighting` fragment shader: `material.*`,
//! `dirLight.*`, `pointLights[i].*` and `spotLight.*`.

use glam::Vec3;

use crate::{camera::Camera, geometry::POINT_LIGHT_POSITIONS, uniform::UniformBlock};

/// Surface material sampled from a diffuse and a specular map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Texture unit holding the diffuse map.
    pub diffuse_unit: i32,
    /// Texture unit holding the specular map.
    pub specular_unit: i32,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_unit: 0,
            specular_unit: 1,
            shininess: 32.0,
        }
    }
}

impl Material {
    /// Writes the sampler bindings. These only need to be set once per program.
    pub fn write_samplers(&self, block: &mut UniformBlock) {
        block.set("material.diffuse", self.diffuse_unit);
        block.set("material.specular", self.specular_unit);
    }

    pub fn write_uniforms(&self, block: &mut UniformBlock) {
        block.set("material.shininess", self.shininess);
    }
}

/// Distance falloff `1 / (constant + linear * d + quadratic * d^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Attenuation {
    /// Covers a distance of roughly 50 units.
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

impl Attenuation {
    /// Returns the light intensity factor at `distance`.
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }

    fn write_uniforms(&self, name: &str, block: &mut UniformBlock) {
        block.set(format!("{name}.constant"), self.constant);
        block.set(format!("{name}.linear"), self.linear);
        block.set(format!("{name}.quadratic"), self.quadratic);
    }
}

/// A light infinitely far away, shining in one direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl DirectionalLight {
    pub fn write_uniforms(&self, name: &str, block: &mut UniformBlock) {
        block.set(format!("{name}.direction"), self.direction);
        block.set(format!("{name}.ambient"), self.ambient);
        block.set(format!("{name}.diffuse"), self.diffuse);
        block.set(format!("{name}.specular"), self.specular);
    }
}

/// An omnidirectional light that fades with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub attenuation: Attenuation,
}

impl PointLight {
    /// A dim-ambient white light at `position`.
    pub fn white(position: Vec3) -> Self {
        Self {
            position,
            ambient: Vec3::splat(0.05),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ONE,
            attenuation: Attenuation::default(),
        }
    }

    pub fn write_uniforms(&self, name: &str, block: &mut UniformBlock) {
        block.set(format!("{name}.position"), self.position);
        block.set(format!("{name}.ambient"), self.ambient);
        block.set(format!("{name}.diffuse"), self.diffuse);
        block.set(format!("{name}.specular"), self.specular);
        self.attenuation.write_uniforms(name, block);
    }
}

/// A cone of light with a soft edge between `cut_off` and `outer_cut_off`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub attenuation: Attenuation,
    /// Inner cone half-angle, in degrees.
    pub cut_off: f32,
    /// Outer cone half-angle, in degrees.
    pub outer_cut_off: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            ambient: Vec3::ZERO,
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
            attenuation: Attenuation::default(),
            cut_off: 12.5,
            outer_cut_off: 15.0,
        }
    }
}

impl SpotLight {
    /// Moves the light onto the camera, pointing where the camera looks.
    pub fn follow(&mut self, camera: &Camera) {
        self.position = camera.position();
        self.direction = camera.front();
    }

    /// The shader compares against cosines, so the angles are uploaded as such.
    pub fn write_uniforms(&self, name: &str, block: &mut UniformBlock) {
        block.set(format!("{name}.position"), self.position);
        block.set(format!("{name}.direction"), self.direction);
        block.set(format!("{name}.ambient"), self.ambient);
        block.set(format!("{name}.diffuse"), self.diffuse);
        block.set(format!("{name}.specular"), self.specular);
        self.attenuation.write_uniforms(name, block);
        block.set(format!("{name}.cutOff"), self.cut_off.to_radians().cos());
        block.set(
            format!("{name}.outerCutOff"),
            self.outer_cut_off.to_radians().cos(),
        );
    }
}

/// Every light in the scene plus the shared material.
#[derive(Debug, Clone, PartialEq)]
pub struct LightingRig {
    pub material: Material,
    pub directional: DirectionalLight,
    pub points: Vec<PointLight>,
    pub spot: SpotLight,
}

impl LightingRig {
    /// One directional light, four white point lights and a flashlight.
    pub fn lecture_six() -> Self {
        Self {
            material: Material::default(),
            directional: DirectionalLight {
                direction: Vec3::new(-0.2, -1.0, -0.3),
                ambient: Vec3::splat(0.05),
                diffuse: Vec3::splat(0.4),
                specular: Vec3::splat(0.5),
            },
            points: POINT_LIGHT_POSITIONS
                .iter()
                .copied()
                .map(PointLight::white)
                .collect(),
            spot: SpotLight::default(),
        }
    }

    /// Attaches the spotlight to the camera and writes the per-frame uniforms,
    /// including `viewPos`.
    pub fn write_uniforms(&mut self, camera: &Camera, block: &mut UniformBlock) {
        self.spot.follow(camera);

        block.set("viewPos", camera.position());
        self.material.write_uniforms(block);
        self.directional.write_uniforms("dirLight", block);
        for (i, light) in self.points.iter().enumerate() {
            light.write_uniforms(&format!("pointLights[{i}]"), block);
        }
        self.spot.write_uniforms("spotLight", block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniform::UniformValue;

    #[test]
    fn test_rig_writes_every_light() {
        let mut rig = LightingRig::lecture_six();
        let camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let mut block = UniformBlock::new();
        rig.write_uniforms(&camera, &mut block);

        // viewPos + shininess + 4 dir + 4 * 7 point + 10 spot
        assert_eq!(block.len(), 1 + 1 + 4 + 4 * 7 + 10);
        assert_eq!(
            block.get("viewPos"),
            Some(&UniformValue::Vec3(Vec3::new(0.0, 0.0, 3.0)))
        );
        assert_eq!(
            block.get("pointLights[3].position"),
            Some(&UniformValue::Vec3(Vec3::new(0.0, 0.0, -3.0)))
        );
        assert_eq!(
            block.get("pointLights[1].quadratic"),
            Some(&UniformValue::Float(0.032))
        );
        assert_eq!(
            block.get("dirLight.direction"),
            Some(&UniformValue::Vec3(Vec3::new(-0.2, -1.0, -0.3)))
        );
        assert_eq!(block.get("pointLights[4].position"), None);
    }

    #[test]
    fn test_spotlight_follows_camera() {
        let mut rig = LightingRig::lecture_six();
        let mut camera = Camera::at(Vec3::new(1.0, 2.0, 3.0));
        camera.process_mouse_movement(120.0, -40.0, true);

        let mut block = UniformBlock::new();
        rig.write_uniforms(&camera, &mut block);

        assert_eq!(rig.spot.position, camera.position());
        assert_eq!(
            block.get("spotLight.direction"),
            Some(&UniformValue::Vec3(camera.front()))
        );
    }

    #[test]
    fn test_spotlight_cutoffs_are_cosines() {
        let mut block = UniformBlock::new();
        SpotLight::default().write_uniforms("spotLight", &mut block);

        let Some(UniformValue::Float(inner)) = block.get("spotLight.cutOff") else {
            panic!("cutOff missing");
        };
        let Some(UniformValue::Float(outer)) = block.get("spotLight.outerCutOff") else {
            panic!("outerCutOff missing");
        };
        assert!((inner - 12.5_f32.to_radians().cos()).abs() < 1e-6);
        assert!(inner > outer);
    }

    #[test]
    fn test_material_samplers() {
        let mut block = UniformBlock::new();
        Material::default().write_samplers(&mut block);
        assert_eq!(block.get("material.diffuse"), Some(&UniformValue::Int(0)));
        assert_eq!(block.get("material.specular"), Some(&UniformValue::Int(1)));
    }

    #[test]
    fn test_attenuation_falls_off() {
        let attenuation = Attenuation::default();
        assert_eq!(attenuation.factor(0.0), 1.0);
        assert!(attenuation.factor(10.0) < attenuation.factor(1.0));
    }
}
