mod headless_commands;
