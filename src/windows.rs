// All Used Windows
use sdl2::render::Canvas;
use sdl2::video::{Window as SDL2Window, WindowPos};

pub struct WindowBuilder<'a> {
    video_subsystem: &'a sdl2::VideoSubsystem,
    title: &'static str,
    width: u32,
    height: u32,
    posx: WindowPos,
    posy: WindowPos,
    resizable: bool,
    hidden: bool,
    borderless: bool,
}

#[allow(dead_code)]
impl WindowBuilder<'_> {
    pub fn new<'a>(
        video_subsystem: &'a sdl2::VideoSubsystem,
        title: &'static str,
        width: u32,
        height: u32,
    ) -> WindowBuilder<'a> {
        WindowBuilder {
            video_subsystem,
            title,
            width,
            height,
            posx: WindowPos::Centered,
            posy: WindowPos::Centered,
            resizable: false,
            hidden: false,
            borderless: false,
        }
    }

    pub fn set_position(mut self, posx: WindowPos, posy: WindowPos) -> Self {
        self.posx = posx;
        self.posy = posy;
        self
    }

    pub fn set_resizable(mut self, b: bool) -> Self {
        self.resizable = b;
        self
    }
    pub fn set_hidden(mut self, b: bool) -> Self {
        self.hidden = b;
        self
    }
    pub fn set_borderless(mut self, b: bool) -> Self {
        self.borderless = b;
        self
    }
    pub fn build(self) -> Result<Window, String> {
        Window::init(self)
    }
}

pub struct Window {
    canvas: Canvas<SDL2Window>,
    width: u32,
    height: u32,
}

#[allow(dead_code)]
impl Window {
    fn init(builder: WindowBuilder) -> Result<Window, String> {
        let window = {
            let mut win =
                builder
                    .video_subsystem
                    .window(builder.title, builder.width, builder.height);
            win.position(
                Window::to_ll_windowpos(builder.posx),
                Window::to_ll_windowpos(builder.posy),
            );
            if builder.resizable {
                win.resizable();
            }
            if builder.hidden {
                win.hidden();
            }
            if builder.borderless {
                win.borderless();
            }
            win.build().map_err(|e| e.to_string())?
        };
        let canvas = window
            .into_canvas()
            .present_vsync()
            .build()
            .map_err(|e| e.to_string())?;
        Ok(Window {
            canvas,
            width: builder.width,
            height: builder.height,
        })
    }
    pub fn canvas(&self) -> &Canvas<SDL2Window> {
        &self.canvas
    }
    pub fn canvas_mut(&mut self) -> &mut Canvas<SDL2Window> {
        &mut self.canvas
    }
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    fn to_ll_windowpos(pos: WindowPos) -> i32 {
        match pos {
            WindowPos::Undefined => sdl2_sys::SDL_WINDOWPOS_UNDEFINED_MASK as i32,
            WindowPos::Centered => sdl2_sys::SDL_WINDOWPOS_CENTERED_MASK as i32,
            WindowPos::Positioned(x) => x as i32,
        }
    }
}
